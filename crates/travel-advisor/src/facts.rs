use rand::seq::SliceRandom;

pub const FACT_TITLE: &str = "Did you know?";

pub trait FactSource: Send + Sync {
    fn next_fact(&self) -> String;
}

const BUILTIN_FACTS: &[&str] = &[
    "France is the most visited country in the world, with around 90 million tourists a year.",
    "Iceland has no mosquitoes.",
    "Canada has more lakes than the rest of the world combined.",
    "The Trans-Siberian Railway crosses eight time zones.",
    "Venice is built on more than 100 small islands.",
    "Tokyo's Shinjuku Station handles over three million passengers a day.",
    "There is a town in Norway called Hell, and it freezes over every winter.",
    "Australia is wider than the Moon.",
    "Finland has more saunas than cars.",
    "Vatican City is the smallest country in the world.",
];

/// Picks uniformly from a fixed list.
pub struct StaticFacts {
    facts: Vec<String>,
}

impl StaticFacts {
    pub fn new(facts: Vec<String>) -> Self {
        Self { facts }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_FACTS.iter().map(|s| s.to_string()).collect())
    }
}

impl FactSource for StaticFacts {
    fn next_fact(&self) -> String {
        self.facts
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }
}
