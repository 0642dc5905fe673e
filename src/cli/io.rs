//! JSON I/O for the `query` command
//!
//! - Input: one JSON object on a single line of stdin
//! - Output: one JSON object on a single line of stdout

use std::io::{BufRead, Write};

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};

/// Read one JSON request line
pub fn read_request_from<R: BufRead>(reader: &mut R) -> CliResult<Value> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(serde_json::from_str(&line)?)
}

/// Write a success response line
pub fn write_response_to<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    write_line(writer, &json!({ "status": "ok", "data": data }))
}

/// Write an error response line
pub fn write_error_to<W: Write>(writer: &mut W, code: &str, message: &str) -> CliResult<()> {
    write_line(
        writer,
        &json!({ "status": "error", "code": code, "message": message }),
    )
}

fn write_line<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_request() {
        let mut input = Cursor::new("{\"op\":\"titles\"}\n{\"op\":\"actors\"}\n");
        let value = read_request_from(&mut input).unwrap();
        assert_eq!(value["op"], "titles");
    }

    #[test]
    fn test_read_empty_input() {
        let mut input = Cursor::new("\n");
        assert!(read_request_from(&mut input).is_err());
    }

    #[test]
    fn test_read_invalid_json() {
        let mut input = Cursor::new("{op}\n");
        assert!(read_request_from(&mut input).is_err());
    }

    #[test]
    fn test_write_response() {
        let mut out = Vec::new();
        write_response_to(&mut out, json!([{"title": "Heat"}])).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["data"][0]["title"], "Heat");
    }

    #[test]
    fn test_write_error() {
        let mut out = Vec::new();
        write_error_to(&mut out, "FILMS_NOT_FOUND", "Could not find film 9").unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "FILMS_NOT_FOUND");
        assert_eq!(value["message"], "Could not find film 9");
    }
}
