use reqwest::Method;

use crate::QueryValue;

/// Query parameter names reserved for credentials.
pub(crate) const CREDENTIAL_KEYS: [&str; 2] = ["login", "key"];

/// Ordered query-string parameters.
///
/// Absent optional values are never inserted, so the encoded query string
/// contains no empty or null entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    pairs: Vec<(String, QueryValue)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.pairs.push((name.into(), value.into()));
        self
    }

    /// Adds a parameter only when `value` is present.
    pub fn with_opt<V: Into<QueryValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// Adds `name=true` only when `flag` is set.
    pub fn with_flag(self, name: impl Into<String>, flag: bool) -> Self {
        if flag {
            self.with(name, true)
        } else {
            self
        }
    }

    /// Adds a comma-joined list of identifiers as a single parameter.
    pub fn with_ids<I, S>(self, name: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.with(name, join_ids(ids))
    }

    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Renders `login`/`key` followed by every non-credential parameter.
    pub(crate) fn to_wire(&self, login: &str, key: &str) -> Vec<(String, String)> {
        let mut wire = Vec::with_capacity(self.pairs.len() + 2);
        wire.push((CREDENTIAL_KEYS[0].to_owned(), login.to_owned()));
        wire.push((CREDENTIAL_KEYS[1].to_owned(), key.to_owned()));
        wire.extend(
            self.pairs
                .iter()
                .filter(|(name, _)| !CREDENTIAL_KEYS.contains(&name.as_str()))
                .map(|(name, value)| (name.clone(), value.to_string())),
        );
        wire
    }
}

/// Comma-joins identifiers, e.g. `["a", "b"]` → `"a,b"`.
pub fn join_ids<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .map(|id| id.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Single API call descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    /// HTTP method. Every StreamTape endpoint is a `GET`.
    pub method: Method,
    /// Path relative to the configured base URL, e.g. `/file/info`.
    pub path: String,
    /// Operation parameters. Credentials are injected by the client.
    pub query: Query,
}

impl Request {
    /// Creates a `GET` request with no parameters.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Query::new(),
        }
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }
}
