use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Result;

/// Conventional ceiling for `hp` when a record carries no `max_hp`.
pub const DEFAULT_MAX_HP: i64 = 100;

pub const DEFAULT_HP: i64 = 100;
pub const DEFAULT_HUNGER: i64 = 50;
pub const DEFAULT_MOOD: &str = "normal";

/// A pet or player record.
///
/// Every recognized key has an optional typed slot; anything else lives in
/// `extra` in insertion order. Nothing is range-checked. A recognized key whose
/// JSON value has the wrong type is kept verbatim in `extra` and its typed slot
/// stays empty, so any JSON object survives a decode/encode cycle unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct PetRecord {
    pub name: Option<String>,
    pub hp: Option<i64>,
    pub hunger: Option<i64>,
    pub mood: Option<String>,
    pub happiness: Option<i64>,
    pub max_hp: Option<i64>,
    pub gold: Option<i64>,
    pub extra: Map<String, Value>,
}

impl PetRecord {
    /// An empty record; every reader falls back to its own defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record seeded with `name` and the conventional hp/hunger/mood defaults.
    pub fn create(name: impl Into<String>) -> Self {
        RecordBuilder::new(name).build()
    }

    pub fn builder(name: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(name)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn mood(&self) -> Option<&str> {
        self.mood.as_deref()
    }

    /// Assign a field by key, routing recognized keys to their typed slot.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();

        let typed = match key.as_str() {
            "name" => assign_text(&mut self.name, &value),
            "mood" => assign_text(&mut self.mood, &value),
            "hp" => assign_int(&mut self.hp, &value),
            "hunger" => assign_int(&mut self.hunger, &value),
            "happiness" => assign_int(&mut self.happiness, &value),
            "max_hp" => assign_int(&mut self.max_hp, &value),
            "gold" => assign_int(&mut self.gold, &value),
            _ => false,
        };

        if typed {
            self.extra.shift_remove(&key);
        } else {
            self.extra.insert(key, value);
        }
    }

    /// Look up any field, typed or extra, as JSON.
    pub fn get(&self, key: &str) -> Option<Value> {
        let typed = match key {
            "name" => self.name.clone().map(Value::from),
            "mood" => self.mood.clone().map(Value::from),
            "hp" => self.hp.map(Value::from),
            "hunger" => self.hunger.map(Value::from),
            "happiness" => self.happiness.map(Value::from),
            "max_hp" => self.max_hp.map(Value::from),
            "gold" => self.gold.map(Value::from),
            _ => None,
        };
        typed.or_else(|| self.extra.get(key).cloned())
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.clone().into())
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn assign_text(slot: &mut Option<String>, value: &Value) -> bool {
    match value {
        Value::String(text) => {
            *slot = Some(text.clone());
            true
        }
        _ => {
            *slot = None;
            false
        }
    }
}

fn assign_int(slot: &mut Option<i64>, value: &Value) -> bool {
    match value.as_i64() {
        Some(n) => {
            *slot = Some(n);
            true
        }
        None => {
            *slot = None;
            false
        }
    }
}

impl From<Map<String, Value>> for PetRecord {
    fn from(map: Map<String, Value>) -> Self {
        let mut record = PetRecord::new();
        for (key, value) in map {
            record.set(key, value);
        }
        record
    }
}

impl From<PetRecord> for Map<String, Value> {
    fn from(record: PetRecord) -> Self {
        let mut map = Map::new();
        if let Some(name) = record.name {
            map.insert("name".to_string(), Value::from(name));
        }
        if let Some(hp) = record.hp {
            map.insert("hp".to_string(), Value::from(hp));
        }
        if let Some(hunger) = record.hunger {
            map.insert("hunger".to_string(), Value::from(hunger));
        }
        if let Some(mood) = record.mood {
            map.insert("mood".to_string(), Value::from(mood));
        }
        if let Some(happiness) = record.happiness {
            map.insert("happiness".to_string(), Value::from(happiness));
        }
        if let Some(max_hp) = record.max_hp {
            map.insert("max_hp".to_string(), Value::from(max_hp));
        }
        if let Some(gold) = record.gold {
            map.insert("gold".to_string(), Value::from(gold));
        }
        // Extras last; a same-named extra replaces the typed value in place.
        for (key, value) in record.extra {
            map.insert(key, value);
        }
        map
    }
}

/// Builds a [`PetRecord`] the way the course's `create_pet` helper does:
/// `name`, `hp`, `hunger` and `mood` are always present, then any extra
/// fields are laid over them in the order they were added.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    name: String,
    hp: i64,
    hunger: i64,
    mood: String,
    fields: Vec<(String, Value)>,
}

impl RecordBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hp: DEFAULT_HP,
            hunger: DEFAULT_HUNGER,
            mood: DEFAULT_MOOD.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn hp(mut self, hp: i64) -> Self {
        self.hp = hp;
        self
    }

    pub fn hunger(mut self, hunger: i64) -> Self {
        self.hunger = hunger;
        self
    }

    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = mood.into();
        self
    }

    /// Extra field. Applied after the seeded fields, so it wins on collision.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    pub fn fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(self) -> PetRecord {
        let mut record = PetRecord {
            name: Some(self.name),
            hp: Some(self.hp),
            hunger: Some(self.hunger),
            mood: Some(self.mood),
            ..PetRecord::default()
        };
        for (key, value) in self.fields {
            record.set(key, value);
        }
        record
    }
}
