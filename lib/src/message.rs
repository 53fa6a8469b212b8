//! Failure messages: the default `"{actual} {operator} {expected}"` form,
//! user templates, and formatter callbacks.

use std::{borrow::Cow, collections::HashMap, fmt};

use crate::value::Value;

pub trait Render: Send + Sync {
    fn render(&self, template: &str, vars: &HashMap<&str, String>) -> String;
}

/// `{name}` placeholder rendering.
///
/// Names are made of `[0-9A-Za-z_]`. Unknown names render empty, and a
/// doubled `{{name}}` renders the literal `{name}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Template;

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

impl Render for Template {
    fn render(&self, template: &str, vars: &HashMap<&str, String>) -> String {
        let bytes = template.as_bytes();
        let mut out = String::with_capacity(template.len());
        let mut last = 0;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] != b'{' {
                i += 1;
                continue;
            }
            let start = i + 1;
            let end = start + bytes[start..].iter().take_while(|b| is_name_byte(**b)).count();
            if end == start || bytes.get(end) != Some(&b'}') {
                i += 1;
                continue;
            }

            let name = &template[start..end];
            out.push_str(&template[last..i]);
            let escaped = i > 0 && bytes[i - 1] == b'{' && bytes.get(end + 1) == Some(&b'}');
            if escaped {
                out.push_str(name);
            } else if let Some(value) = vars.get(name) {
                out.push_str(value);
            }
            i = end + 1;
            last = i;
        }
        out.push_str(&template[last..]);
        out
    }
}

type Formatter<'a> = Box<dyn Fn(&str, &str, &Value) -> String + 'a>;

/// How a failed check words its error.
#[derive(Default)]
pub enum Message<'a> {
    /// `"{actual} {operator} {expected}"`.
    #[default]
    Default,
    /// A template rendered with the failure's fields.
    Template(Cow<'a, str>),
    /// Called with `(actual, expected, value)`; its return is the message.
    Formatter(Formatter<'a>),
}

impl<'a> Message<'a> {
    pub fn formatter(formatter: impl Fn(&str, &str, &Value) -> String + 'a) -> Self {
        Self::Formatter(Box::new(formatter))
    }

    pub(crate) fn resolve(self, failure: &Failure<'_>, renderer: &dyn Render) -> String {
        match self {
            Self::Formatter(formatter) => formatter(failure.actual, failure.expected, failure.value),
            Self::Template(template) if !template.is_empty() => {
                renderer.render(&template, &failure.vars())
            }
            _ => format!(
                "{} {} {}",
                failure.actual, failure.operator, failure.expected
            ),
        }
    }
}

pub(crate) struct Failure<'a> {
    pub name: &'a str,
    pub value: &'a Value,
    pub actual: &'a str,
    pub expected: &'a str,
    pub operator: &'a str,
}

impl Failure<'_> {
    fn vars(&self) -> HashMap<&'static str, String> {
        HashMap::from([
            ("name", self.name.to_string()),
            ("value", self.value.to_string()),
            ("actual", self.actual.to_string()),
            ("expected", self.expected.to_string()),
            ("operator", self.operator.to_string()),
        ])
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Formatter(_) => f.debug_tuple("Formatter").finish(),
        }
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(template: &'a str) -> Self {
        Self::Template(Cow::Borrowed(template))
    }
}
impl From<String> for Message<'_> {
    fn from(template: String) -> Self {
        Self::Template(Cow::Owned(template))
    }
}
impl<'a> From<Option<&'a str>> for Message<'a> {
    fn from(template: Option<&'a str>) -> Self {
        template.map_or(Self::Default, Into::into)
    }
}

/// A function value always becomes a formatter, a string a template.
/// Anything else keeps the default message.
impl From<Value> for Message<'_> {
    fn from(value: Value) -> Self {
        match value {
            function @ Value::Function(_) => Self::formatter(move |actual, expected, value| {
                function
                    .call(vec![actual.into(), expected.into(), value.clone()])
                    .unwrap_or_default()
                    .to_string()
            }),
            Value::String(template) => template.into(),
            _ => Self::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn substitutes_known_placeholders() {
        let vars = vars(&[("expected", "number"), ("actual", "string")]);
        assert_eq!(
            Template.render("expect `val` to be {expected}, got {actual}", &vars),
            "expect `val` to be number, got string"
        );
    }

    #[test]
    fn unknown_placeholders_render_empty() {
        assert_eq!(Template.render("a{missing}b", &HashMap::new()), "ab");
    }

    #[test]
    fn doubled_braces_escape() {
        let vars = vars(&[("actual", "string")]);
        assert_eq!(Template.render("{{actual}} is {actual}", &vars), "{actual} is string");
    }

    #[test]
    fn non_placeholders_are_verbatim() {
        let vars = vars(&[("actual", "string")]);
        assert_eq!(Template.render("{ actual } {} {a-b} {", &vars), "{ actual } {} {a-b} {");
        assert_eq!(Template.render("ünï{actual}cödé", &vars), "ünïstringcödé");
    }

    #[test]
    fn empty_template_falls_back_to_default() {
        let value = Value::from("foo");
        let failure = Failure {
            name: "AssertionError",
            value: &value,
            actual: "string",
            expected: "object",
            operator: "!==",
        };
        assert_eq!(Message::from("").resolve(&failure, &Template), "string !== object");
        assert_eq!(Message::from(None::<&str>).resolve(&failure, &Template), "string !== object");
        assert_eq!(
            Message::from(Value::from(1)).resolve(&failure, &Template),
            "string !== object"
        );
    }
}
