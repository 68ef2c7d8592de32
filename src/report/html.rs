use std::fmt::{Display, Write as _};

use chrono::NaiveDateTime;

use crate::scanner::{LexicalError, Token};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; }
        .container { background: white; padding: 20px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h1 { color: #2c3e50; text-align: center; border-bottom: 3px solid #3498db; padding-bottom: 10px; }
        .info { background: #d4edda; padding: 15px; border-radius: 5px; margin-bottom: 20px; border-left: 5px solid #28a745; }
        table { width: 100%; border-collapse: collapse; margin: 20px 0; }
        th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
        th { background-color: #34495e; color: white; font-weight: bold; }
        tr:nth-child(even) { background-color: #f8f9fa; }
        tr:hover { background-color: #e3f2fd; }
        .count { background: #007bff; color: white; padding: 5px 10px; border-radius: 15px; font-weight: bold; }
        .error-count { background: #dc3545; color: white; padding: 5px 10px; border-radius: 15px; font-weight: bold; }
        .no-errors { background: #d4edda; color: #155724; padding: 20px; border-radius: 5px; text-align: center; }
        .timestamp { text-align: right; color: #6c757d; font-style: italic; margin-top: 20px; }
"#;

/// Escapes text for use in HTML element content.
struct Escape<'a>(&'a str);

impl Display for Escape<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

/// Renders a lexeme so that invisible characters stay visible in a table cell.
fn visible(lexeme: &str) -> String {
    lexeme.escape_debug().to_string()
}

fn page(title: &str, source_name: &str, body: &str, generated_at: &NaiveDateTime) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title} - {name}</title>
    <style>
{STYLE}    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
{body}        <div class="timestamp">
            Generado el: {timestamp}
        </div>
    </div>
</body>
</html>
"#,
        title = title,
        name = Escape(source_name),
        body = body,
        timestamp = generated_at.format(TIMESTAMP_FORMAT),
    )
}

/// Renders the token report page: file name, token count and one row per token.
pub fn token_report(tokens: &[Token], source_name: &str, generated_at: &NaiveDateTime) -> String {
    let mut body = format!(
        r#"        <div class="info">
            <strong>Archivo analizado:</strong> {}<br>
            <strong>Total de tokens:</strong> <span class="count">{}</span>
        </div>
        <table>
            <thead>
                <tr><th>#</th><th>Tipo de Token</th><th>Lexema</th><th>Linea</th><th>Columna</th></tr>
            </thead>
            <tbody>
"#,
        Escape(source_name),
        tokens.len()
    );
    for (i, token) in tokens.iter().enumerate() {
        let _ = writeln!(
            body,
            "                <tr><td>{}</td><td>{}</td><td><code>{}</code></td><td>{}</td><td>{}</td></tr>",
            i + 1,
            token.kind,
            Escape(&token.lexeme),
            token.line,
            token.column
        );
    }
    body.push_str("            </tbody>\n        </table>\n");

    page("Reporte de Tokens", source_name, &body, generated_at)
}

/// Renders the error report page, or a success notice when `errors` is empty.
pub fn error_report(
    errors: &[LexicalError],
    source_name: &str,
    generated_at: &NaiveDateTime,
) -> String {
    let mut body = String::new();
    if errors.is_empty() {
        let _ = write!(
            body,
            r#"        <div class="no-errors">
            <h2>ANALISIS EXITOSO!</h2>
            <p>El archivo <strong>{}</strong> fue analizado sin errores.</p>
        </div>
"#,
            Escape(source_name)
        );
    } else {
        let _ = write!(
            body,
            r#"        <div class="info">
            <strong>Archivo analizado:</strong> {}<br>
            <strong>Total de errores:</strong> <span class="error-count">{}</span><br>
            <strong>Estos son errores:</strong> Caracteres no validos en el lenguaje
        </div>
        <table>
            <thead>
                <tr><th>#</th><th>Linea</th><th>Columna</th><th>Lexema No Valido</th><th>Tipo de Error</th></tr>
            </thead>
            <tbody>
"#,
            Escape(source_name),
            errors.len()
        );
        for (i, error) in errors.iter().enumerate() {
            let _ = writeln!(
                body,
                "                <tr><td>{}</td><td>{}</td><td>{}</td><td><strong><code>\"{}\"</code></strong></td><td>{}</td></tr>",
                i + 1,
                error.line,
                error.column,
                Escape(&visible(&error.character.to_string())),
                error.kind()
            );
        }
        body.push_str("            </tbody>\n        </table>\n");
    }

    page("Reporte de Errores", source_name, &body, generated_at)
}
