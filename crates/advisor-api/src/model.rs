use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-assigned destination identifier.
///
/// The backend hands out integer primary keys today, but nothing on this side
/// depends on that: ids are accepted as JSON numbers or strings and kept as an
/// opaque token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DestinationId(String);

impl DestinationId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DestinationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DestinationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// Advice category. The five known categories have a fixed display order;
/// anything else the backend sends is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Safety,
    Weather,
    Culture,
    Transportation,
    Attractions,
    Other(String),
}

impl Category {
    /// Display order of the known categories.
    pub const ORDER: [Category; 5] = [
        Category::Safety,
        Category::Weather,
        Category::Culture,
        Category::Transportation,
        Category::Attractions,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Safety => "safety",
            Category::Weather => "weather",
            Category::Culture => "culture",
            Category::Transportation => "transportation",
            Category::Attractions => "attractions",
            Category::Other(raw) => raw,
        }
    }

    /// Position in [`Category::ORDER`], `None` for passthrough categories.
    pub fn rank(&self) -> Option<usize> {
        Self::ORDER.iter().position(|c| c == self)
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Safety => "Safety Information",
            Category::Weather => "Weather and Climate",
            Category::Culture => "Cultural Guide",
            Category::Transportation => "Transportation",
            Category::Attractions => "Attractions and Activities",
            Category::Other(raw) => raw,
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        match raw {
            "safety" => Category::Safety,
            "weather" => Category::Weather,
            "culture" => Category::Culture,
            "transportation" => Category::Transportation,
            "attractions" => Category::Attractions,
            other => Category::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Category::from(raw.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceItem {
    pub category: Category,
    #[serde(default)]
    pub content: Option<String>,
}

/// A destination together with its current advice, as returned by
/// `GET /api/destinations/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvicePayload {
    pub id: DestinationId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub advice: Vec<AdviceItem>,
}

/// Body of a detail fetch, whatever its status. Every field may be missing;
/// a 404 carries only `{"detail": ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdviceResponse {
    #[serde(default)]
    pub id: Option<DestinationId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub advice: Vec<AdviceItem>,
}

impl AdviceResponse {
    /// Falls back to `requested` when the body names no id.
    pub fn into_payload(self, requested: &DestinationId) -> AdvicePayload {
        AdvicePayload {
            id: self.id.unwrap_or_else(|| requested.clone()),
            name: self.name,
            country: self.country,
            description: self.description,
            advice: self.advice,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DestinationRef {
    pub id: DestinationId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DestinationList {
    #[serde(default)]
    pub results: Vec<DestinationRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateDestinationRequest<'a> {
    pub name: &'a str,
    pub country: &'a str,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateAdviceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_question: Option<String>,
}

impl GenerateAdviceRequest {
    pub fn is_empty(&self) -> bool {
        self.hobbies.is_none() && self.follow_up_question.is_none()
    }
}
