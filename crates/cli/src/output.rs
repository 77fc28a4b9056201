use crate::error::CliError;
use filter_syntax::lexer::token::Token;
use model::resource::attribute::AttributeSpec;
use planner::CompiledFilter;

pub fn print_compiled(filter: &CompiledFilter, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(filter)?
    } else {
        serde_json::to_string(filter)?
    };
    println!("{json}");
    Ok(())
}

pub fn print_attributes(
    resource: &str,
    attributes: &[AttributeSpec],
    json: bool,
) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(attributes)?);
        return Ok(());
    }

    println!("{resource}:");
    let width = attributes.iter().map(|a| a.name.len()).max().unwrap_or(0);
    for attr in attributes {
        let operators = attr
            .allowed_operators
            .iter()
            .map(|op| op.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let mut line = format!(
            "  {:<width$}  {:<9}  {operators}",
            attr.name,
            attr.value_type.to_string()
        );
        if attr.column != attr.name {
            line.push_str(&format!("  (column {})", attr.column));
        }
        if !attr.enum_values.is_empty() {
            line.push_str(&format!("  [{}]", attr.enum_values.join(", ")));
        }
        println!("{line}");
    }
    Ok(())
}

pub fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!(
            "{}:{}\t{}\t{:?}",
            token.span.line, token.span.column, token.kind, token.lexeme
        );
    }
}
