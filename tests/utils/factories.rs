/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use adota_lib::modules::animal::{Animal, AnimalType, FurLength, Gender};
use adota_lib::modules::event::{Event, EventType};
use adota_lib::modules::ong::{Ong, OngRef};
use adota_lib::shared::domain::value_objects::Address;

pub struct AnimalFactory {
    id: i64,
    name: String,
    animal_type: AnimalType,
    age: u32,
    gender: Gender,
    breed: Option<String>,
    color: Option<String>,
    fur: FurLength,
    castrated: bool,
    adopted: bool,
    ong_id: Option<i64>,
}

impl Default for AnimalFactory {
    fn default() -> Self {
        Self {
            id: rand::random::<u32>() as i64 % 1_000_000 + 1,
            name: "Test Animal".to_string(),
            animal_type: AnimalType::Dog,
            age: 3,
            gender: Gender::Female,
            breed: None,
            color: None,
            fur: FurLength::Short,
            castrated: false,
            adopted: false,
            ong_id: None,
        }
    }
}

impl AnimalFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_type(mut self, animal_type: AnimalType) -> Self {
        self.animal_type = animal_type;
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_breed(mut self, breed: &str) -> Self {
        self.breed = Some(breed.to_string());
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn castrated(mut self, castrated: bool) -> Self {
        self.castrated = castrated;
        self
    }

    pub fn adopted(mut self) -> Self {
        self.adopted = true;
        self
    }

    pub fn owned_by(mut self, ong_id: i64) -> Self {
        self.ong_id = Some(ong_id);
        self
    }

    pub fn build(self) -> Animal {
        Animal {
            id: self.id,
            name: self.name,
            animal_type: self.animal_type,
            age: self.age,
            gender: self.gender,
            breed: self.breed,
            color: self.color,
            fur: self.fur,
            castrated: self.castrated,
            adopted: self.adopted,
            weight: 10.0,
            photo: None,
            ong: self.ong_id.map(|id| OngRef { id, name: None }),
        }
    }

    /// `count` animals with ids `1..=count` and names "Animal 1", "Animal 2", ...
    pub fn numbered(count: usize) -> Vec<Animal> {
        (1..=count)
            .map(|i| {
                Self::new()
                    .with_id(i as i64)
                    .with_name(&format!("Animal {}", i))
                    .build()
            })
            .collect()
    }
}

pub struct EventFactory {
    id: i64,
    name: String,
    event_type: EventType,
    start_date: String,
    end_date: String,
    ong_id: Option<i64>,
}

impl Default for EventFactory {
    fn default() -> Self {
        Self {
            id: rand::random::<u32>() as i64 % 1_000_000 + 1,
            name: "Test Event".to_string(),
            event_type: EventType::AdoptionFair,
            start_date: "01/01/2030 10:00".to_string(),
            end_date: "01/01/2030 12:00".to_string(),
            ong_id: None,
        }
    }
}

impl EventFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    /// Both dates as `dd/MM/yyyy HH:mm`
    pub fn between(mut self, start: &str, end: &str) -> Self {
        self.start_date = start.to_string();
        self.end_date = end.to_string();
        self
    }

    pub fn owned_by(mut self, ong_id: i64) -> Self {
        self.ong_id = Some(ong_id);
        self
    }

    pub fn build(self) -> Event {
        Event {
            id: self.id,
            name: self.name,
            event_type: self.event_type,
            start_date: self.start_date,
            end_date: self.end_date,
            description: None,
            address: None,
            ong: self.ong_id.map(|id| OngRef { id, name: None }),
        }
    }
}

pub struct OngFactory {
    id: i64,
    name: String,
    city: Option<String>,
    state: Option<String>,
}

impl Default for OngFactory {
    fn default() -> Self {
        Self {
            id: rand::random::<u32>() as i64 % 1_000_000 + 1,
            name: "Test ONG".to_string(),
            city: None,
            state: None,
        }
    }
}

impl OngFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn located_in(mut self, city: &str, state: &str) -> Self {
        self.city = Some(city.to_string());
        self.state = Some(state.to_string());
        self
    }

    pub fn build(self) -> Ong {
        let address = match (self.city, self.state) {
            (None, None) => None,
            (city, state) => Some(Address {
                city,
                state,
                ..Address::default()
            }),
        };
        Ong {
            id: self.id,
            name: self.name,
            cnpj: "12345678000199".to_string(),
            email: None,
            phone: None,
            description: None,
            address,
            instagram: None,
            facebook: None,
            website: None,
        }
    }
}
