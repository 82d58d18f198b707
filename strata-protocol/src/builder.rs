//! The query tree and its serialization into a document string.
//!
//! The serialization mirrors the engine's own grammar: objects of
//! `name:value` pairs, where a value may itself be a nested object or a
//! list of objects. Two flags thread through the recursion as explicit
//! parameters: whether the surrounding context is a list (list brackets
//! are emitted by the parent), and whether each list element must be
//! wrapped in its own object braces (lists of composite records).
//!
//! Names are emitted verbatim. A name containing the document's own
//! delimiter characters produces a malformed document that only the
//! engine's parser will reject; that is a caller bug, not a compiler
//! error. The downstream parser tolerates trailing commas, and the
//! compiler relies on that: every argument and every field element is
//! followed by a comma, including the last one.

use crate::value::Value;

/// A node of the argument tree: either a scalar leaf or a nested object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field {
    /// Field name; may be empty for anonymous list-element nodes.
    pub name: String,

    /// Optional filter operator (e.g. `contains`), appended to the name
    /// as `name_action` when both are non-empty.
    pub action: Option<String>,

    /// Whether the value is a list literal, wrapped in `[` `]`.
    pub is_list: bool,

    /// Whether each list element is additionally wrapped in `{` `}`.
    /// Used for lists of composite records; independent of `is_list`.
    pub wrap_list: bool,

    /// Leaf value. Ignored when `fields` is non-empty.
    pub value: Option<Value>,

    /// Sub-selection of fields, rendered in order.
    pub fields: Vec<Field>,
}

impl Field {
    pub fn scalar(name: impl Into<String>, value: impl Into<Value>) -> Field {
        Field {
            name: name.into(),
            value: Some(value.into()),
            ..Field::default()
        }
    }

    pub fn nested(name: impl Into<String>, fields: Vec<Field>) -> Field {
        Field {
            name: name.into(),
            fields,
            ..Field::default()
        }
    }
}

/// A named argument of a query or of a nested output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Input {
    pub name: String,

    /// Scalar argument value. Takes precedence over `fields`.
    pub value: Option<Value>,

    /// Sub-selection used for nested filter objects.
    pub fields: Vec<Field>,
}

impl Input {
    pub fn value(name: impl Into<String>, value: impl Into<Value>) -> Input {
        Input {
            name: name.into(),
            value: Some(value.into()),
            fields: Vec::new(),
        }
    }

    pub fn fields(name: impl Into<String>, fields: Vec<Field>) -> Input {
        Input {
            name: name.into(),
            value: None,
            fields,
        }
    }
}

/// A result field requested from the engine.
///
/// An output with neither `inputs` nor `outputs` is a scalar leaf;
/// nested `outputs` select relation fields, and `inputs` scope arguments
/// to that particular sub-selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Output {
    pub name: String,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
}

impl Output {
    pub fn leaf(name: impl Into<String>) -> Output {
        Output {
            name: name.into(),
            ..Output::default()
        }
    }

    pub fn nested(name: impl Into<String>, outputs: Vec<Output>) -> Output {
        Output {
            name: name.into(),
            outputs,
            ..Output::default()
        }
    }
}

/// A single database operation, ready to be compiled into a document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    /// The operation kind: `query`, `mutation` or `subscription`.
    pub operation: String,

    /// Name of the operation; useful for tracing.
    pub name: String,

    /// The crud method, e.g. `findMany`.
    pub method: String,

    /// The model name, concatenated directly after the method.
    pub model: String,

    /// Top-level arguments.
    pub inputs: Vec<Input>,

    /// The requested result shape.
    pub outputs: Vec<Output>,
}

impl Query {
    /// Compile the query into its document string.
    ///
    /// Never fails on structurally valid input; the ordering of inputs,
    /// outputs and fields is preserved verbatim.
    pub fn compile(&self) -> String {
        let mut buf = String::new();
        buf.push_str(&self.operation);
        buf.push(' ');
        buf.push_str(&self.name);
        buf.push('{');
        buf.push_str(&self.method);
        buf.push_str(&self.model);
        if !self.inputs.is_empty() {
            render_inputs(&mut buf, &self.inputs);
        }
        buf.push(' ');
        render_outputs(&mut buf, &self.outputs);
        buf.push('}');
        buf
    }
}

fn render_inputs(buf: &mut String, inputs: &[Input]) {
    buf.push('(');
    for input in inputs {
        buf.push_str(&input.name);
        buf.push(':');
        if let Some(value) = &input.value {
            buf.push_str(&value.to_string());
        } else {
            // an input with no value and no fields renders as `{}`
            render_fields(buf, &input.fields, false, false);
        }
        buf.push(',');
    }
    buf.push(')');
}

fn render_outputs(buf: &mut String, outputs: &[Output]) {
    buf.push('{');
    for output in outputs {
        buf.push_str(&output.name);
        buf.push(' ');
        if !output.inputs.is_empty() {
            render_inputs(buf, &output.inputs);
        }
        if !output.outputs.is_empty() {
            render_outputs(buf, &output.outputs);
        }
    }
    buf.push('}');
}

fn render_fields(buf: &mut String, fields: &[Field], list: bool, wrap_list: bool) {
    if !list {
        buf.push('{');
    }
    for field in fields {
        if wrap_list {
            buf.push('{');
        }
        if !field.name.is_empty() {
            buf.push_str(&field.name);
            if let Some(action) = field.action.as_deref().filter(|a| !a.is_empty()) {
                buf.push('_');
                buf.push_str(action);
            }
            buf.push(':');
        }
        if field.is_list {
            buf.push('[');
        }
        if !field.fields.is_empty() {
            render_fields(buf, &field.fields, field.is_list, field.wrap_list);
        } else if let Some(value) = &field.value {
            buf.push_str(&value.to_string());
        }
        if field.is_list {
            buf.push(']');
        }
        if wrap_list {
            buf.push('}');
        }
        buf.push(',');
    }
    if !list {
        buf.push('}');
    }
}
