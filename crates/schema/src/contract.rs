//! Validation contracts: ordered field → rules tables.

use crate::rule::Rule;

/// The rules of one field, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    name: &'static str,
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }
}

impl core::fmt::Display for FieldRules {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let tags = self
            .rules
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}: {}", self.name, tags)
    }
}

/// The full set of rules for one command type.
///
/// Field order is significant: it is the order violations are reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contract {
    fields: Vec<FieldRules>,
}

impl Contract {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Declaring the same field twice keeps both entries; both
    /// are checked.
    pub fn field(mut self, name: &'static str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push(FieldRules {
            name,
            rules: rules.into_iter().collect(),
        });
        self
    }

    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldRules> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}
