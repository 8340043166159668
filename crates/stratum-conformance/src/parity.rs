//! Host C library parity checks.
//!
//! For the operations with a direct host-libc counterpart, evaluates the
//! host's answer and reports divergence from ours. Divergence is expected
//! where the runtime's documented contract differs (wraparound parsing,
//! truncation behavior), so the result is a note, never a failure.

use std::ffi::CString;

/// Compares `our_result` against the host library, when the operation has
/// a counterpart. Returns a note describing divergence, `None` when the
/// host agrees or no counterpart exists.
pub fn host_divergence(function: &str, inputs: &[String], our_result: &str) -> Option<String> {
    let host = host_result(function, inputs)?;
    if host == our_result {
        None
    } else {
        Some(format!("host={host}, impl={our_result}"))
    }
}

fn host_result(function: &str, inputs: &[String]) -> Option<String> {
    match function {
        "str_len" => {
            let s = CString::new(inputs.first()?.as_bytes()).ok()?;
            let len = unsafe { libc::strlen(s.as_ptr()) };
            Some(len.to_string())
        }
        "str_to_i32" => {
            let s = CString::new(inputs.first()?.as_bytes()).ok()?;
            let value = unsafe { libc::atoi(s.as_ptr()) };
            Some(value.to_string())
        }
        "str_ncmp" => {
            if inputs.len() != 3 {
                return None;
            }
            let a = CString::new(inputs[0].as_bytes()).ok()?;
            let b = CString::new(inputs[1].as_bytes()).ok()?;
            let n: usize = inputs[2].parse().ok()?;
            let r = unsafe { libc::strncmp(a.as_ptr(), b.as_ptr(), n) };
            Some(r.signum().to_string())
        }
        "to_upper" => {
            let c: u8 = inputs.first()?.parse().ok().or_else(|| {
                let chars: Vec<char> = inputs.first()?.chars().collect();
                (chars.len() == 1 && chars[0].is_ascii()).then(|| chars[0] as u8)
            })?;
            let r = unsafe { libc::toupper(c as libc::c_int) };
            Some(r.to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_host_agrees_on_plain_cases() {
        assert_eq!(host_divergence("str_len", &inputs(&["hello"]), "5"), None);
        assert_eq!(host_divergence("str_to_i32", &inputs(&["42"]), "42"), None);
        assert_eq!(host_divergence("to_upper", &inputs(&["97"]), "65"), None);
    }

    #[test]
    fn test_divergence_is_reported() {
        let note = host_divergence("str_len", &inputs(&["hello"]), "99").unwrap();
        assert!(note.contains("host=5"));
        assert!(note.contains("impl=99"));
    }

    #[test]
    fn test_functions_without_counterpart_are_skipped() {
        assert_eq!(host_divergence("fmt_i64", &inputs(&["1"]), "1"), None);
    }
}
