use std::collections::VecDeque;

use indexmap::IndexMap;
use serde_json::Value;

use crate::datatype::Datatype;
use crate::error::ValidationError;
use crate::schema::Schema;
use crate::search_params::SearchParams;

/// One immutable typed view over an ordered query sequence.
///
/// Every mutating operation returns a new `QueryParams` backed by a new
/// sequence; the receiver is never touched. Snapshots can therefore be
/// kept around, compared, and shared across threads without locking.
///
/// Reads go through a per-key index built once at construction, so
/// repeated lookups do not rescan the sequence.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: SearchParams,
    by_key: IndexMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a query string (with or without leading `?`).
    pub fn parse(query: &str) -> Self {
        Self::from(SearchParams::parse(query))
    }

    fn index(params: &SearchParams) -> IndexMap<String, Vec<String>> {
        let mut by_key: IndexMap<String, Vec<String>> = IndexMap::new();
        for (key, value) in params.iter() {
            by_key
                .entry(key.to_string())
                .or_default()
                .push(value.to_string());
        }
        by_key
    }

    fn rebuild(&self, pairs: Vec<(String, String)>) -> Self {
        Self::from(SearchParams::from_pairs(pairs))
    }

    fn owned_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// The backing ordered sequence.
    pub fn as_search_params(&self) -> &SearchParams {
        &self.params
    }

    /// Raw values stored under `name`, in sequence order. Empty if the
    /// key is absent.
    pub fn get_all(&self, name: &str) -> &[String] {
        match self.by_key.get(name) {
            Some(values) => values.as_slice(),
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter()
    }

    /// Canonical delimited form of the current sequence.
    pub fn to_query_string(&self) -> String {
        self.params.to_query_string()
    }

    /// Read `name` as `datatype`, leniently.
    ///
    /// A parse failure is indistinguishable from "nothing there": both
    /// come back as `None`. Use [`Self::try_get`] to tell the two apart.
    pub fn get<D: Datatype>(&self, name: &str, datatype: &D) -> Option<D::Item> {
        datatype.parse(self.get_all(name)).ok().flatten()
    }

    /// Read `name` as `datatype`, raising a structured failure on
    /// malformed input.
    ///
    /// `Ok(None)` is still a possible outcome: "present but represents
    /// absence" is a success, distinct from a failed parse.
    pub fn try_get<D: Datatype>(
        &self,
        name: &str,
        datatype: &D,
    ) -> Result<Option<D::Item>, ValidationError> {
        let values = self.get_all(name);
        datatype.parse(values).map_err(|error| ValidationError {
            property: name.to_string(),
            datatype: datatype.name().into_owned(),
            values: values.to_vec(),
            error,
        })
    }

    /// True iff at least one raw value exists for `name` and the stored
    /// list parses as `datatype`. An absent key is always `false`,
    /// regardless of the datatype's own tolerance for empty input.
    pub fn has<D: Datatype>(&self, name: &str, datatype: &D) -> bool {
        let values = self.get_all(name);
        !values.is_empty() && datatype.parse(values).is_ok()
    }

    /// Append the serialized form of `value` as trailing entries for
    /// `name`, after all existing entries. No other key is consulted or
    /// altered.
    #[must_use]
    pub fn append<D: Datatype>(&self, name: &str, datatype: &D, value: Option<&D::Item>) -> Self {
        let mut pairs = self.owned_pairs();
        pairs.extend(
            datatype
                .serialize(value)
                .into_iter()
                .map(|v| (name.to_string(), v)),
        );
        self.rebuild(pairs)
    }

    /// Remove every entry for `name`; the order of remaining entries is
    /// unchanged.
    #[must_use]
    pub fn delete(&self, name: &str) -> Self {
        let pairs = self
            .params
            .iter()
            .filter(|(key, _)| *key != name)
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.rebuild(pairs)
    }

    /// Replace the values stored under `name` with the serialized form of
    /// `value`, preserving the position of every untouched entry.
    ///
    /// Serializing to an empty list removes the key entirely, equivalent
    /// to [`Self::delete`].
    #[must_use]
    pub fn set<D: Datatype>(&self, name: &str, datatype: &D, value: Option<&D::Item>) -> Self {
        let mut updates = IndexMap::new();
        updates.insert(name.to_string(), datatype.serialize(value));
        self.set_internal(updates)
    }

    /// Stable sort of all entries by key; entries sharing a key keep
    /// their original relative order.
    #[must_use]
    pub fn sort(&self) -> Self {
        let mut pairs = self.owned_pairs();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        self.rebuild(pairs)
    }

    /// Read every schema field leniently into one ordered object.
    ///
    /// A field that is absent or fails to parse comes back as `Null`
    /// without affecting the other fields.
    pub fn get_obj(&self, schema: &Schema) -> IndexMap<String, Value> {
        schema
            .iter()
            .map(|(name, datatype)| {
                let value = datatype
                    .parse_value(self.get_all(name))
                    .unwrap_or(Value::Null);
                (name.to_string(), value)
            })
            .collect()
    }

    /// Read every schema field, aborting on the first failure.
    ///
    /// Fields are visited in schema order and no partial object is
    /// returned on failure.
    pub fn try_get_obj(&self, schema: &Schema) -> Result<IndexMap<String, Value>, ValidationError> {
        let mut object = IndexMap::with_capacity(schema.len());
        for (name, datatype) in schema.iter() {
            let values = self.get_all(name);
            let value = datatype.parse_value(values).map_err(|error| ValidationError {
                property: name.to_string(),
                datatype: datatype.type_name().into_owned(),
                values: values.to_vec(),
                error,
            })?;
            object.insert(name.to_string(), value);
        }
        Ok(object)
    }

    /// Serialize every supplied field through its schema datatype and
    /// apply all of them in a single order-preserving pass, so relative
    /// ordering between different keys' retained entries is stable.
    ///
    /// # Panics
    ///
    /// Supplying a name the schema does not define, or a value that does
    /// not convert to the field's item type, is a contract violation and
    /// aborts immediately.
    #[must_use]
    #[allow(clippy::panic)]
    pub fn set_obj<I>(&self, schema: &Schema, values: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut updates: IndexMap<String, Vec<String>> = IndexMap::new();
        for (name, value) in values {
            let Some(datatype) = schema.get(&name) else {
                panic!("set_obj: property \"{name}\" is not defined in the schema");
            };
            match datatype.serialize_value(&value) {
                Ok(serialized) => updates.insert(name, serialized),
                Err(error) => panic!(
                    "set_obj: property \"{name}\" does not serialize as {}: {error}",
                    datatype.type_name()
                ),
            };
        }
        self.set_internal(updates)
    }

    /// Order-preserving merge of new raw values into the sequence.
    ///
    /// Each updated key gets a private queue of its new values. One walk
    /// over the original sequence then replaces the Nth occurrence of an
    /// updated key with the Nth new value in place, and drops occurrences
    /// beyond the new count wherever they sat. Leftover new values are
    /// appended at the end, grouped per key in `updates` iteration order.
    fn set_internal(&self, updates: IndexMap<String, Vec<String>>) -> Self {
        let mut queues: IndexMap<String, VecDeque<String>> = updates
            .into_iter()
            .map(|(key, values)| (key, VecDeque::from(values)))
            .collect();

        let mut pairs = Vec::with_capacity(self.params.len());
        for (key, value) in self.params.iter() {
            match queues.get_mut(key) {
                None => pairs.push((key.to_string(), value.to_string())),
                Some(queue) => {
                    if let Some(replacement) = queue.pop_front() {
                        pairs.push((key.to_string(), replacement));
                    }
                }
            }
        }
        for (key, queue) in queues {
            for value in queue {
                pairs.push((key.clone(), value));
            }
        }
        self.rebuild(pairs)
    }
}

impl From<SearchParams> for QueryParams {
    fn from(params: SearchParams) -> Self {
        let by_key = Self::index(&params);
        Self { params, by_key }
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for QueryParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::from(SearchParams::from_iter(iter))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self::from(SearchParams::from_iter(iter))
    }
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
