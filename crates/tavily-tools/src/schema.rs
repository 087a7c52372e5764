//! Per-field option tables and everything derived from them.
//!
//! Each capability declares its options as a `&'static [FieldSpec]`. That one
//! table drives three things:
//!
//! - the JSON schema advertised to the framework ([`input_schema`]),
//! - validation of invocation arguments, and
//! - the default/override merge that produces the effective request body
//!   ([`merge_arguments`]).
//!
//! Fields marked locked never take a per-call value; they bound the size and
//! shape of the response and are fixed when the tool is constructed.

use serde_json::{json, Map, Value};

/// The JSON type an option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
    StringList,
    Object,
    ObjectList,
    Enum(&'static [&'static str]),
    EnumList(&'static [&'static str]),
}

/// Built-in default for an option, representable in const context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Unset,
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl DefaultValue {
    fn to_value(self) -> Option<Value> {
        match self {
            DefaultValue::Unset => None,
            DefaultValue::Bool(flag) => Some(Value::Bool(flag)),
            DefaultValue::Int(count) => Some(json!(count)),
            DefaultValue::Str(text) => Some(Value::String(text.to_string())),
        }
    }
}

/// One option of a capability.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Public argument name.
    pub name: &'static str,
    /// Name the field takes in the request body, when it differs.
    pub wire: Option<&'static str>,
    pub kind: FieldKind,
    pub description: &'static str,
    /// Must be present at invocation time.
    pub required: bool,
    /// A per-call value may replace the configured default. Locked fields
    /// (neither required nor overridable) keep their construction-time value
    /// no matter what a call supplies.
    pub overridable: bool,
    pub default: DefaultValue,
}

impl FieldSpec {
    pub const fn required(
        name: &'static str,
        kind: FieldKind,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            wire: None,
            kind,
            description,
            required: true,
            overridable: true,
            default: DefaultValue::Unset,
        }
    }

    pub const fn overridable(
        name: &'static str,
        kind: FieldKind,
        description: &'static str,
        default: DefaultValue,
    ) -> Self {
        Self {
            name,
            wire: None,
            kind,
            description,
            required: false,
            overridable: true,
            default,
        }
    }

    pub const fn locked(
        name: &'static str,
        kind: FieldKind,
        description: &'static str,
        default: DefaultValue,
    ) -> Self {
        Self {
            name,
            wire: None,
            kind,
            description,
            required: false,
            overridable: false,
            default,
        }
    }

    /// Rename the field on the wire.
    pub const fn with_wire(mut self, wire: &'static str) -> Self {
        self.wire = Some(wire);
        self
    }

    /// The name this field takes in the request body.
    pub fn wire_name(&self) -> &'static str {
        self.wire.unwrap_or(self.name)
    }
}

/// Build the invocation schema for a field table.
///
/// Locked fields are not part of the invocation surface and do not appear.
pub fn input_schema(fields: &[FieldSpec]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in fields {
        if !(field.required || field.overridable) {
            continue;
        }

        let mut property = match field.kind {
            FieldKind::String => json!({"type": "string"}),
            FieldKind::Integer => json!({"type": "integer"}),
            FieldKind::Boolean => json!({"type": "boolean"}),
            FieldKind::StringList => json!({"type": "array", "items": {"type": "string"}}),
            FieldKind::Object => json!({"type": "object"}),
            FieldKind::ObjectList => json!({"type": "array", "items": {"type": "object"}}),
            FieldKind::Enum(values) => json!({"type": "string", "enum": values}),
            FieldKind::EnumList(values) => {
                json!({"type": "array", "items": {"type": "string", "enum": values}})
            }
        };

        let entry = property.as_object_mut().expect("schema property object");
        entry.insert("description".to_string(), json!(field.description));
        if let Some(default) = field.default.to_value() {
            entry.insert("default".to_string(), default);
        }

        properties.insert(field.name.to_string(), property);
        if field.required {
            required.push(field.name);
        }
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

/// The construction-time default layer: the table's built-ins overlaid with
/// the values the caller configured, keyed by wire name.
pub fn base_defaults(
    fields: &[FieldSpec],
    configured: &Map<String, Value>,
) -> Result<Map<String, Value>, String> {
    let mut defaults = Map::new();
    for field in fields {
        if let Some(value) = field.default.to_value() {
            defaults.insert(field.wire_name().to_string(), value);
        }
    }

    for (key, value) in configured {
        let field = find_field(fields, key)?;
        if value.is_null() {
            continue;
        }
        check_kind(field, value)?;
        defaults.insert(field.wire_name().to_string(), value.clone());
    }

    Ok(defaults)
}

/// Overlay invocation arguments onto configured defaults, last write wins per
/// field.
///
/// A supplied overridable value replaces the default; an absent (or `null`)
/// one falls through to it. Locked keys are ignored. Unknown keys and type
/// mismatches are rejected before anything touches the network. The result is
/// the effective request body, keyed by wire name — a pure function of the
/// table, the defaults and the arguments.
pub fn merge_arguments(
    fields: &[FieldSpec],
    defaults: &Map<String, Value>,
    arguments: &Map<String, Value>,
) -> Result<Map<String, Value>, String> {
    let mut effective = defaults.clone();

    for (key, value) in arguments {
        let field = find_field(fields, key)?;
        if !(field.required || field.overridable) {
            tracing::debug!(field = field.name, "ignoring locked field supplied at invocation time");
            continue;
        }
        if value.is_null() {
            continue;
        }
        check_kind(field, value)?;
        effective.insert(field.wire_name().to_string(), value.clone());
    }

    for field in fields {
        if field.required && !effective.contains_key(field.wire_name()) {
            return Err(format!("missing required argument '{}'", field.name));
        }
    }

    Ok(effective)
}

fn find_field<'a>(fields: &'a [FieldSpec], name: &str) -> Result<&'a FieldSpec, String> {
    fields
        .iter()
        .find(|field| field.name == name)
        .ok_or_else(|| format!("unknown argument '{}'", name))
}

fn check_kind(field: &FieldSpec, value: &Value) -> Result<(), String> {
    if kind_matches(field.kind, value) {
        Ok(())
    } else {
        Err(format!("'{}' expects {}", field.name, expectation(field.kind)))
    }
}

fn kind_matches(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::String => value.is_string(),
        FieldKind::Integer => value.is_u64(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::StringList => value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_string)),
        FieldKind::Object => value.is_object(),
        FieldKind::ObjectList => value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_object)),
        FieldKind::Enum(allowed) => value.as_str().is_some_and(|text| allowed.contains(&text)),
        FieldKind::EnumList(allowed) => value.as_array().is_some_and(|items| {
            items
                .iter()
                .all(|item| item.as_str().is_some_and(|text| allowed.contains(&text)))
        }),
    }
}

fn expectation(kind: FieldKind) -> String {
    match kind {
        FieldKind::String => "a string".to_string(),
        FieldKind::Integer => "a non-negative integer".to_string(),
        FieldKind::Boolean => "a boolean".to_string(),
        FieldKind::StringList => "a list of strings".to_string(),
        FieldKind::Object => "an object".to_string(),
        FieldKind::ObjectList => "a list of objects".to_string(),
        FieldKind::Enum(allowed) => format!("one of {:?}", allowed),
        FieldKind::EnumList(allowed) => format!("a list drawn from {:?}", allowed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("query", FieldKind::String, "the query"),
        FieldSpec::overridable(
            "search_depth",
            FieldKind::Enum(&["basic", "advanced"]),
            "depth",
            DefaultValue::Str("advanced"),
        ),
        FieldSpec::overridable(
            "include_domains",
            FieldKind::StringList,
            "domains",
            DefaultValue::Unset,
        ),
        FieldSpec::locked("max_results", FieldKind::Integer, "cap", DefaultValue::Int(5)),
        FieldSpec::locked(
            "include_answer",
            FieldKind::Boolean,
            "answer",
            DefaultValue::Bool(false),
        ),
        FieldSpec::overridable(
            "research_model",
            FieldKind::Enum(&["mini", "pro", "auto"]),
            "model",
            DefaultValue::Unset,
        )
        .with_wire("model"),
    ];

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    fn defaults() -> Map<String, Value> {
        base_defaults(FIELDS, &Map::new()).unwrap()
    }

    #[test]
    fn built_in_defaults_populate_the_base_layer() {
        let defaults = defaults();
        assert_eq!(defaults["search_depth"], "advanced");
        assert_eq!(defaults["max_results"], 5);
        assert_eq!(defaults["include_answer"], false);
        assert!(!defaults.contains_key("include_domains"));
        assert!(!defaults.contains_key("query"));
    }

    #[test]
    fn configured_defaults_override_built_ins() {
        let configured = args(json!({"max_results": 2, "search_depth": "basic"}));
        let defaults = base_defaults(FIELDS, &configured).unwrap();
        assert_eq!(defaults["max_results"], 2);
        assert_eq!(defaults["search_depth"], "basic");
    }

    #[test]
    fn configured_defaults_reject_unknown_fields() {
        let configured = args(json!({"page_size": 10}));
        let error = base_defaults(FIELDS, &configured).unwrap_err();
        assert!(error.contains("page_size"));
    }

    #[test]
    fn invocation_value_wins_over_default() {
        let merged =
            merge_arguments(FIELDS, &defaults(), &args(json!({"query": "q", "search_depth": "basic"})))
                .unwrap();
        assert_eq!(merged["search_depth"], "basic");
    }

    #[test]
    fn omitted_value_falls_back_to_default() {
        let merged = merge_arguments(FIELDS, &defaults(), &args(json!({"query": "q"}))).unwrap();
        assert_eq!(merged["search_depth"], "advanced");
        assert_eq!(merged["max_results"], 5);
    }

    #[test]
    fn locked_field_ignores_invocation_value() {
        let merged = merge_arguments(
            FIELDS,
            &defaults(),
            &args(json!({"query": "q", "include_answer": true, "max_results": 100})),
        )
        .unwrap();
        assert_eq!(merged["include_answer"], false);
        assert_eq!(merged["max_results"], 5);
    }

    #[test]
    fn unknown_argument_is_rejected() {
        let error =
            merge_arguments(FIELDS, &defaults(), &args(json!({"query": "q", "foo": 1}))).unwrap_err();
        assert!(error.contains("foo"));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let error = merge_arguments(
            FIELDS,
            &defaults(),
            &args(json!({"query": "q", "include_domains": "example.com"})),
        )
        .unwrap_err();
        assert!(error.contains("include_domains"));
        assert!(error.contains("list of strings"));
    }

    #[test]
    fn enum_value_outside_the_allowed_set_is_rejected() {
        let error = merge_arguments(
            FIELDS,
            &defaults(),
            &args(json!({"query": "q", "search_depth": "exhaustive"})),
        )
        .unwrap_err();
        assert!(error.contains("search_depth"));
    }

    #[test]
    fn missing_required_argument_is_rejected() {
        let error = merge_arguments(FIELDS, &defaults(), &Map::new()).unwrap_err();
        assert!(error.contains("query"));
    }

    #[test]
    fn null_falls_through_to_the_default() {
        let merged = merge_arguments(
            FIELDS,
            &defaults(),
            &args(json!({"query": "q", "search_depth": null})),
        )
        .unwrap();
        assert_eq!(merged["search_depth"], "advanced");
    }

    #[test]
    fn merge_is_a_pure_function_of_its_inputs() {
        let arguments = args(json!({"query": "q", "include_domains": ["example.com"]}));
        let first = merge_arguments(FIELDS, &defaults(), &arguments).unwrap();
        let second = merge_arguments(FIELDS, &defaults(), &arguments).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn wire_rename_applies_to_defaults_and_arguments() {
        let configured = args(json!({"research_model": "auto"}));
        let defaults = base_defaults(FIELDS, &configured).unwrap();
        assert_eq!(defaults["model"], "auto");
        assert!(!defaults.contains_key("research_model"));

        let merged = merge_arguments(
            FIELDS,
            &defaults,
            &args(json!({"query": "q", "research_model": "pro"})),
        )
        .unwrap();
        assert_eq!(merged["model"], "pro");
    }

    #[test]
    fn schema_lists_only_the_invocation_surface() {
        let schema = input_schema(FIELDS);
        let properties = schema["properties"].as_object().unwrap();

        assert!(properties.contains_key("query"));
        assert!(properties.contains_key("search_depth"));
        assert!(!properties.contains_key("max_results"));
        assert!(!properties.contains_key("include_answer"));

        assert_eq!(schema["required"], json!(["query"]));
        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(properties["search_depth"]["default"], "advanced");
        assert_eq!(properties["search_depth"]["enum"], json!(["basic", "advanced"]));
    }
}
