use std::fmt::{Error, Result, Write as _};

use super::{GroupNode, GroupTree, Schema, SignalSpec};

/// Format a schema in a readable style:
/// a header line, then the group tree with groups rendered as blocks and
/// signals rendered in one line. Nested groups follow the same rule.
pub fn format_schema(schema: &Schema) -> std::result::Result<String, Error> {
    let mut out = String::new();
    writeln!(
        out,
        "record_size: {}, endianness: {}, time_unit: {}",
        schema.record_size, schema.byte_order, schema.time_axis_unit
    )?;

    let tree = GroupTree::build(schema);
    format_group_body(schema, &tree.root, 0, &mut out)?;
    Ok(out)
}

fn format_group_body(schema: &Schema, node: &GroupNode, indent: usize, out: &mut String) -> Result {
    for &index in &node.signals {
        format_signal(&schema.signals[index], indent, out)?;
    }
    for child in &node.children {
        format_group(schema, child, indent, out)?;
    }
    Ok(())
}

fn format_group(schema: &Schema, node: &GroupNode, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}{}:", node.name)?;
    if !node.description.is_empty() {
        writeln!(out, "{pad}    description: {}", node.description)?;
    }
    format_group_body(schema, node, indent + 4, out)
}

fn format_signal(signal: &SignalSpec, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    write!(
        out,
        "{pad}{}: {{ type: {}, offset: {}, scale: {}, bias: {}",
        signal.name, signal.value_type, signal.byte_offset, signal.scale, signal.bias
    )?;
    if !signal.unit.is_empty() {
        write!(out, ", unit: {}", signal.unit)?;
    }
    writeln!(
        out,
        ", time_scale: {:.3} {} }}",
        signal.time_scale, signal.time_unit
    )
}
