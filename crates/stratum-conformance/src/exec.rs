//! Case executor: dispatches a named runtime operation over string inputs
//! and renders the result canonically.
//!
//! Rendering rules: integers in decimal; three-way comparisons as their
//! sign (-1/0/1); classification results as 1/0; missing search results as
//! `none`; byte buffers as printable ASCII with `\xNN` escapes for
//! everything else.

use thiserror::Error;

use stratum_core::{ctype, fmt, math, parse, string};

/// Errors from case execution.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("unknown function `{function}`")]
    Unknown { function: String },
    #[error("`{function}` expects {expected} inputs, got {got}")]
    Arity {
        function: String,
        expected: usize,
        got: usize,
    },
    #[error("`{function}`: bad argument: {detail}")]
    Argument { function: String, detail: String },
}

fn arity(function: &str, inputs: &[String], expected: usize) -> Result<(), ExecError> {
    if inputs.len() != expected {
        return Err(ExecError::Arity {
            function: function.to_string(),
            expected,
            got: inputs.len(),
        });
    }
    Ok(())
}

fn bad_arg(function: &str, detail: impl Into<String>) -> ExecError {
    ExecError::Argument {
        function: function.to_string(),
        detail: detail.into(),
    }
}

/// NUL-terminates a fixture string for the C-string operations.
fn c_string(s: &str) -> Vec<u8> {
    let mut v = s.as_bytes().to_vec();
    v.push(0);
    v
}

fn arg_usize(function: &str, s: &str) -> Result<usize, ExecError> {
    s.parse()
        .map_err(|_| bad_arg(function, format!("`{s}` is not a usize")))
}

fn arg_i32(function: &str, s: &str) -> Result<i32, ExecError> {
    s.parse()
        .map_err(|_| bad_arg(function, format!("`{s}` is not an i32")))
}

fn arg_i64(function: &str, s: &str) -> Result<i64, ExecError> {
    s.parse()
        .map_err(|_| bad_arg(function, format!("`{s}` is not an i64")))
}

fn arg_u32(function: &str, s: &str) -> Result<u32, ExecError> {
    s.parse()
        .map_err(|_| bad_arg(function, format!("`{s}` is not a u32")))
}

fn arg_u64(function: &str, s: &str) -> Result<u64, ExecError> {
    s.parse()
        .map_err(|_| bad_arg(function, format!("`{s}` is not a u64")))
}

fn arg_f64(function: &str, s: &str) -> Result<f64, ExecError> {
    s.parse()
        .map_err(|_| bad_arg(function, format!("`{s}` is not an f64")))
}

fn arg_bool(function: &str, s: &str) -> Result<bool, ExecError> {
    match s {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(bad_arg(function, format!("`{s}` is not a bool"))),
    }
}

/// A byte argument: a decimal code, or a single non-digit character.
fn arg_byte(function: &str, s: &str) -> Result<u8, ExecError> {
    if let Ok(code) = s.parse() {
        return Ok(code);
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() == 1 && chars[0].is_ascii() {
        return Ok(chars[0] as u8);
    }
    Err(bad_arg(function, format!("`{s}` is not a byte")))
}

fn render_bytes(bytes: &[u8]) -> String {
    let mut out = String::new();
    for &b in bytes {
        if (0x20..=0x7E).contains(&b) && b != b'\\' {
            out.push(b as char);
        } else {
            out.push_str(&format!("\\x{b:02x}"));
        }
    }
    out
}

fn render_index(idx: Option<usize>) -> String {
    match idx {
        Some(i) => i.to_string(),
        None => "none".to_string(),
    }
}

fn render_flag(flag: bool) -> String {
    if flag { "1".into() } else { "0".into() }
}

/// Executes one named operation and renders its result.
pub fn execute_case(function: &str, inputs: &[String]) -> Result<String, ExecError> {
    match function {
        // --- C-string operations ---
        "str_len" => {
            arity(function, inputs, 1)?;
            Ok(string::str_len(&c_string(&inputs[0])).to_string())
        }
        "str_nlen" => {
            arity(function, inputs, 2)?;
            let maxlen = arg_usize(function, &inputs[1])?;
            Ok(string::str_nlen(&c_string(&inputs[0]), maxlen).to_string())
        }
        "str_cmp" => {
            arity(function, inputs, 2)?;
            let r = string::str_cmp(&c_string(&inputs[0]), &c_string(&inputs[1]));
            Ok(r.signum().to_string())
        }
        "str_ncmp" => {
            arity(function, inputs, 3)?;
            let n = arg_usize(function, &inputs[2])?;
            let r = string::str_ncmp(&c_string(&inputs[0]), &c_string(&inputs[1]), n);
            Ok(r.signum().to_string())
        }
        "str_cpy" => {
            arity(function, inputs, 2)?;
            let cap = arg_usize(function, &inputs[1])?;
            let mut buf = vec![0u8; cap];
            let written = string::str_cpy(&mut buf, &c_string(&inputs[0]));
            Ok(render_bytes(&buf[..written]))
        }
        "str_ncpy" => {
            arity(function, inputs, 3)?;
            let n = arg_usize(function, &inputs[1])?;
            let cap = arg_usize(function, &inputs[2])?;
            let mut buf = vec![0u8; cap];
            let written = string::str_ncpy(&mut buf, &c_string(&inputs[0]), n);
            Ok(render_bytes(&buf[..written]))
        }
        "str_cat" => {
            arity(function, inputs, 3)?;
            let cap = arg_usize(function, &inputs[2])?;
            let mut buf = vec![0u8; cap];
            string::str_cpy(&mut buf, &c_string(&inputs[0]));
            let total = string::str_cat(&mut buf, &c_string(&inputs[1]));
            Ok(render_bytes(&buf[..=total]))
        }
        "str_ncat" => {
            arity(function, inputs, 4)?;
            let n = arg_usize(function, &inputs[2])?;
            let cap = arg_usize(function, &inputs[3])?;
            let mut buf = vec![0u8; cap];
            string::str_cpy(&mut buf, &c_string(&inputs[0]));
            let total = string::str_ncat(&mut buf, &c_string(&inputs[1]), n);
            Ok(render_bytes(&buf[..=total]))
        }
        "str_chr" => {
            arity(function, inputs, 2)?;
            let c = arg_byte(function, &inputs[1])?;
            Ok(render_index(string::str_chr(&c_string(&inputs[0]), c)))
        }
        "str_rchr" => {
            arity(function, inputs, 2)?;
            let c = arg_byte(function, &inputs[1])?;
            Ok(render_index(string::str_rchr(&c_string(&inputs[0]), c)))
        }
        "str_str" => {
            arity(function, inputs, 2)?;
            Ok(render_index(string::str_str(
                &c_string(&inputs[0]),
                &c_string(&inputs[1]),
            )))
        }

        // --- Memory operations ---
        "mem_cmp" => {
            arity(function, inputs, 3)?;
            let n = arg_usize(function, &inputs[2])?;
            let r = string::mem_cmp(inputs[0].as_bytes(), inputs[1].as_bytes(), n);
            Ok((r as i32).to_string())
        }
        "mem_chr" => {
            arity(function, inputs, 3)?;
            let c = arg_byte(function, &inputs[1])?;
            let n = arg_usize(function, &inputs[2])?;
            Ok(render_index(string::mem_chr(inputs[0].as_bytes(), c, n)))
        }
        "mem_set" => {
            arity(function, inputs, 3)?;
            let len = arg_usize(function, &inputs[0])?;
            let value = arg_byte(function, &inputs[1])?;
            let n = arg_usize(function, &inputs[2])?;
            let mut buf = vec![b'.'; len];
            string::mem_set(&mut buf, value, n);
            Ok(render_bytes(&buf))
        }
        "mem_move_within" => {
            arity(function, inputs, 4)?;
            let mut buf = inputs[0].as_bytes().to_vec();
            let src = arg_usize(function, &inputs[1])?;
            let dest = arg_usize(function, &inputs[2])?;
            let n = arg_usize(function, &inputs[3])?;
            string::mem_move_within(&mut buf, src, dest, n);
            Ok(render_bytes(&buf))
        }

        // --- Character classification ---
        "is_digit" => {
            arity(function, inputs, 1)?;
            Ok(render_flag(ctype::is_digit(arg_byte(function, &inputs[0])?)))
        }
        "is_alpha" => {
            arity(function, inputs, 1)?;
            Ok(render_flag(ctype::is_alpha(arg_byte(function, &inputs[0])?)))
        }
        "is_alnum" => {
            arity(function, inputs, 1)?;
            Ok(render_flag(ctype::is_alnum(arg_byte(function, &inputs[0])?)))
        }
        "is_space" => {
            arity(function, inputs, 1)?;
            Ok(render_flag(ctype::is_space(arg_byte(function, &inputs[0])?)))
        }
        "is_upper" => {
            arity(function, inputs, 1)?;
            Ok(render_flag(ctype::is_upper(arg_byte(function, &inputs[0])?)))
        }
        "is_lower" => {
            arity(function, inputs, 1)?;
            Ok(render_flag(ctype::is_lower(arg_byte(function, &inputs[0])?)))
        }
        "to_upper" => {
            arity(function, inputs, 1)?;
            Ok(ctype::to_upper(arg_byte(function, &inputs[0])?).to_string())
        }
        "to_lower" => {
            arity(function, inputs, 1)?;
            Ok(ctype::to_lower(arg_byte(function, &inputs[0])?).to_string())
        }

        // --- Parsing ---
        "str_to_i32" => {
            arity(function, inputs, 1)?;
            Ok(parse::str_to_i32(&c_string(&inputs[0])).to_string())
        }
        "str_to_i64" => {
            arity(function, inputs, 1)?;
            Ok(parse::str_to_i64(&c_string(&inputs[0])).to_string())
        }
        "str_to_i64_checked" => {
            arity(function, inputs, 1)?;
            let (value, consumed, status) = parse::str_to_i64_checked(&c_string(&inputs[0]));
            let status = match status {
                parse::ParseStatus::Ok => "ok",
                parse::ParseStatus::Overflow => "overflow",
                parse::ParseStatus::Underflow => "underflow",
            };
            Ok(format!("value={value} consumed={consumed} status={status}"))
        }

        // --- Formatting ---
        "fmt_i32" => {
            arity(function, inputs, 1)?;
            Ok(fmt::fmt_i32(arg_i32(function, &inputs[0])?).as_str().into())
        }
        "fmt_i64" => {
            arity(function, inputs, 1)?;
            Ok(fmt::fmt_i64(arg_i64(function, &inputs[0])?).as_str().into())
        }
        "fmt_u32" => {
            arity(function, inputs, 1)?;
            Ok(fmt::fmt_u32(arg_u32(function, &inputs[0])?).as_str().into())
        }
        "fmt_u64" => {
            arity(function, inputs, 1)?;
            Ok(fmt::fmt_u64(arg_u64(function, &inputs[0])?).as_str().into())
        }
        "fmt_u64_radix" => {
            arity(function, inputs, 3)?;
            let value = arg_u64(function, &inputs[0])?;
            let radix = arg_u32(function, &inputs[1])?;
            let uppercase = arg_bool(function, &inputs[2])?;
            Ok(fmt::fmt_u64_radix(value, radix, uppercase).as_str().into())
        }
        "fmt_f64" => {
            arity(function, inputs, 1)?;
            Ok(fmt::fmt_f64(arg_f64(function, &inputs[0])?).as_str().into())
        }

        // --- Integer math ---
        "abs_i32" => {
            arity(function, inputs, 1)?;
            Ok(math::abs_i32(arg_i32(function, &inputs[0])?).to_string())
        }
        "abs_i64" => {
            arity(function, inputs, 1)?;
            Ok(math::abs_i64(arg_i64(function, &inputs[0])?).to_string())
        }
        "min_i32" => {
            arity(function, inputs, 2)?;
            let a = arg_i32(function, &inputs[0])?;
            let b = arg_i32(function, &inputs[1])?;
            Ok(math::min_i32(a, b).to_string())
        }
        "max_i32" => {
            arity(function, inputs, 2)?;
            let a = arg_i32(function, &inputs[0])?;
            let b = arg_i32(function, &inputs[1])?;
            Ok(math::max_i32(a, b).to_string())
        }
        "clamp_i32" => {
            arity(function, inputs, 3)?;
            let v = arg_i32(function, &inputs[0])?;
            let min = arg_i32(function, &inputs[1])?;
            let max = arg_i32(function, &inputs[2])?;
            Ok(math::clamp_i32(v, min, max).to_string())
        }
        "gcd_i32" => {
            arity(function, inputs, 2)?;
            let a = arg_i32(function, &inputs[0])?;
            let b = arg_i32(function, &inputs[1])?;
            Ok(math::gcd_i32(a, b).to_string())
        }
        "gcd_i64" => {
            arity(function, inputs, 2)?;
            let a = arg_i64(function, &inputs[0])?;
            let b = arg_i64(function, &inputs[1])?;
            Ok(math::gcd_i64(a, b).to_string())
        }
        "lcm_i32" => {
            arity(function, inputs, 2)?;
            let a = arg_i32(function, &inputs[0])?;
            let b = arg_i32(function, &inputs[1])?;
            Ok(math::lcm_i32(a, b).to_string())
        }
        "lcm_i64" => {
            arity(function, inputs, 2)?;
            let a = arg_i64(function, &inputs[0])?;
            let b = arg_i64(function, &inputs[1])?;
            Ok(math::lcm_i64(a, b).to_string())
        }

        _ => Err(ExecError::Unknown {
            function: function.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(function: &str, inputs: &[&str]) -> String {
        let inputs: Vec<String> = inputs.iter().map(|s| s.to_string()).collect();
        execute_case(function, &inputs).unwrap()
    }

    #[test]
    fn test_string_dispatch() {
        assert_eq!(run("str_len", &["hello"]), "5");
        assert_eq!(run("str_cmp", &["abc", "abd"]), "-1");
        assert_eq!(run("str_str", &["hello world", "world"]), "6");
        assert_eq!(run("str_chr", &["hello", "z"]), "none");
    }

    #[test]
    fn test_copy_rendering() {
        assert_eq!(run("str_cpy", &["hi", "8"]), "hi\\x00");
        // Truncating str_ncpy leaves no terminator in the written window.
        assert_eq!(run("str_ncpy", &["hello", "3", "3"]), "hel");
        assert_eq!(run("str_ncpy", &["hi", "5", "8"]), "hi\\x00\\x00\\x00");
    }

    #[test]
    fn test_parse_dispatch() {
        assert_eq!(run("str_to_i32", &["  +042abc"]), "42");
        assert_eq!(run("str_to_i32", &[""]), "0");
        assert_eq!(run("str_to_i32", &["-"]), "0");
        assert_eq!(
            run("str_to_i64_checked", &["9223372036854775808"]),
            "value=9223372036854775807 consumed=19 status=overflow"
        );
    }

    #[test]
    fn test_fmt_dispatch() {
        assert_eq!(run("fmt_i64", &["-9223372036854775808"]), "-9223372036854775808");
        assert_eq!(run("fmt_u64_radix", &["255", "16", "false"]), "ff");
        assert_eq!(run("fmt_f64", &["1.5"]), "1.5");
    }

    #[test]
    fn test_math_dispatch() {
        assert_eq!(run("gcd_i32", &["12", "18"]), "6");
        assert_eq!(run("lcm_i32", &["4", "6"]), "12");
        assert_eq!(run("clamp_i32", &["15", "0", "10"]), "10");
        assert_eq!(run("to_upper", &["a"]), "65");
    }

    #[test]
    fn test_mem_dispatch() {
        assert_eq!(run("mem_move_within", &["abcdef", "0", "2", "4"]), "ababcd");
        assert_eq!(run("mem_set", &["6", "X", "3"]), "XXX...");
    }

    #[test]
    fn test_unknown_function_is_an_error() {
        let err = execute_case("no_such_op", &[]).unwrap_err();
        assert!(matches!(err, ExecError::Unknown { .. }));
    }

    #[test]
    fn test_arity_is_checked() {
        let err = execute_case("str_len", &[]).unwrap_err();
        assert!(matches!(err, ExecError::Arity { expected: 1, .. }));
    }
}
