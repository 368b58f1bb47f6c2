use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::duration::deserialize_opt_duration;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct SuiteFile {
    #[serde(default)]
    pub tests: Vec<TestDefinition>,
}

/// One declared API check: the request to send and what the response must
/// look like.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct TestDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub request: RequestSpec,
    #[serde(default)]
    pub expect: ExpectationSpec,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestSpec {
    /// Kept as written so an unsupported verb fails the test instead of the
    /// whole suite.
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub params: MultiMap,
    /// When present, replaces the request's header set entirely.
    #[serde(default)]
    pub headers: Option<MultiMap>,
    #[serde(default, rename = "with_clientID", alias = "with_client_id")]
    pub with_client_id: bool,
    #[serde(default, rename = "with_token", alias = "with_auth_token")]
    pub with_auth_token: bool,
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub body: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpectationSpec {
    #[serde(default)]
    pub status_code: u16,
    /// `max_latnecy` is the key existing suite files use.
    #[serde(
        default,
        rename = "max_latnecy",
        alias = "max_latency",
        deserialize_with = "deserialize_opt_duration"
    )]
    pub max_latency: Option<Duration>,
    #[serde(default)]
    pub body: Vec<BodyAssertion>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct BodyAssertion {
    pub path: String,
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    /// Resolves a verb against the supported set, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
        }
    }
}

/// Key-ordered multimap used for query parameters and headers.
///
/// Each key maps to its values in declaration order. Files may give a single
/// scalar instead of a list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MultiMap(BTreeMap<String, Vec<String>>);

impl MultiMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Iterates `(key, value)` pairs, keys in order, values as declared.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }

    /// Form-encodes the pairs (`a=1&b=x+y`).
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for MultiMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.append(key, value);
        }
        map
    }
}

impl<'de> Deserialize<'de> for MultiMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<BTreeMap<String, Values>>::deserialize(deserializer)?;
        Ok(Self(
            raw.unwrap_or_default()
                .into_iter()
                .map(|(key, Values(values))| (key, values))
                .collect(),
        ))
    }
}

/// Values of one multimap key: a list, a single scalar, or nothing.
///
/// List items keep their text as written. The single-scalar shorthand is
/// read as a typed scalar, so `2.0` becomes `2`.
struct Values(Vec<String>);

impl<'de> Deserialize<'de> for Values {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValuesVisitor).map(Self)
    }
}

struct ValuesVisitor;

impl<'de> Visitor<'de> for ValuesVisitor {
    type Value = Vec<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a scalar or a list of scalars")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(ScalarText(text)) = seq.next_element()? {
            values.push(text);
        }
        Ok(values)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(vec![value.to_owned()])
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(vec![value])
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(vec![value.to_string()])
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(vec![value.to_string()])
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(vec![value.to_string()])
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(vec![value.to_string()])
    }
}

/// A scalar read as text. Plain YAML scalars such as `1.0` or `0.10` keep
/// their source text; `null` and `~` read as empty.
struct ScalarText(String);

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionalTextVisitor).map(Self)
    }
}

struct OptionalTextVisitor;

impl<'de> Visitor<'de> for OptionalTextVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a scalar value")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(String::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(String::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TextVisitor)
    }
}

struct TextVisitor;

impl Visitor<'_> for TextVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a scalar value")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(value.to_owned())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(value)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(value.to_string())
    }
}

fn deserialize_scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    ScalarText::deserialize(deserializer).map(|ScalarText(text)| text)
}
