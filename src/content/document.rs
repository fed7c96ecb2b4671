use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A missing or `null` nested string reads as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A feature card: heading plus one line of body copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// A frequently asked question. Stored as `{"q": ..., "a": ...}` in copy files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(rename = "q", default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(rename = "a", default, deserialize_with = "null_as_empty")]
    pub answer: String,
}

/// One authored copy document (`copy/common.json` or `copy/{tone}.json`).
///
/// Every key is optional. A key set to `null` is treated the same as a
/// missing key. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subhead: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_primary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_secondary: Option<String>,

    /// Index 0 is the default line, index 2 the Hindi line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microcopy: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Feature>>,

    /// Only the first phrase is displayed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_phrases: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_proof: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,

    /// Step texts, optionally prefixed with "Step N: "
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<Vec<String>>,
}

impl ContentDocument {
    /// Parse a document from a JSON body.
    ///
    /// The top level must be an object. Arrays and scalars are rejected even
    /// though serde would otherwise fill struct fields by position.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let object: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(object))
    }

    /// Lay `over` on top of `self`: every field `over` defines wins.
    ///
    /// Replacement is per top-level field. A list in `over` replaces the
    /// whole list in `self`; entries are never spliced.
    pub fn overlay(self, over: ContentDocument) -> ContentDocument {
        ContentDocument {
            hero: over.hero.or(self.hero),
            subhead: over.subhead.or(self.subhead),
            cta_primary: over.cta_primary.or(self.cta_primary),
            cta_secondary: over.cta_secondary.or(self.cta_secondary),
            microcopy: over.microcopy.or(self.microcopy),
            bullets: over.bullets.or(self.bullets),
            features: over.features.or(self.features),
            pricing_phrases: over.pricing_phrases.or(self.pricing_phrases),
            social_proof: over.social_proof.or(self.social_proof),
            faqs: over.faqs.or(self.faqs),
            process: over.process.or(self.process),
        }
    }

    /// Names of the top-level fields this document defines.
    pub fn defined_fields(&self) -> Vec<&'static str> {
        let present = [
            ("hero", self.hero.is_some()),
            ("subhead", self.subhead.is_some()),
            ("cta_primary", self.cta_primary.is_some()),
            ("cta_secondary", self.cta_secondary.is_some()),
            ("microcopy", self.microcopy.is_some()),
            ("bullets", self.bullets.is_some()),
            ("features", self.features.is_some()),
            ("pricing_phrases", self.pricing_phrases.is_some()),
            ("social_proof", self.social_proof.is_some()),
            ("faqs", self.faqs.is_some()),
            ("process", self.process.is_some()),
        ];
        present
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.defined_fields().is_empty()
    }
}
