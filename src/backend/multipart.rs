//! Minimal multipart/form-data encoding for the CV upload.
//!
//! The upload endpoint expects exactly one `file` part carrying a PDF, so
//! a full multipart writer would be overkill. The boundary is derived from
//! a v4 uuid, which cannot collide with PDF content in practice.

/// A multipart body ready to send, along with its Content-Type header.
pub(crate) struct MultipartBody {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Encode `bytes` as the single `file` field of a multipart form.
pub(crate) fn pdf_file_body(file_name: &str, bytes: &[u8]) -> MultipartBody {
    let boundary = format!("jobpilot-{}", uuid::Uuid::new_v4().simple());
    let name = sanitize_file_name(file_name);

    let mut body = Vec::with_capacity(bytes.len() + 512);
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{name}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    MultipartBody {
        content_type: format!("multipart/form-data; boundary={boundary}"),
        bytes: body,
    }
}

/// Keep the filename header well-formed regardless of what the picker
/// returned.
fn sanitize_file_name(file_name: &str) -> String {
    let cleaned: String = file_name
        .chars()
        .filter(|ch| !ch.is_control() && *ch != '"' && *ch != '\\')
        .collect();
    if cleaned.trim().is_empty() {
        "cv.pdf".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_frames_single_pdf_part() {
        let part = pdf_file_body("resume.pdf", b"%PDF-1.4 data");
        let boundary = part
            .content_type
            .strip_prefix("multipart/form-data; boundary=")
            .unwrap()
            .to_string();
        let text = String::from_utf8_lossy(&part.bytes).to_string();
        assert!(text.starts_with(&format!("--{boundary}\r\n")));
        assert!(text.contains("Content-Disposition: form-data; name=\"file\"; filename=\"resume.pdf\""));
        assert!(text.contains("Content-Type: application/pdf\r\n\r\n%PDF-1.4 data"));
        assert!(text.ends_with(&format!("\r\n--{boundary}--\r\n")));
    }

    #[test]
    fn hostile_file_names_are_cleaned() {
        let part = pdf_file_body("a\"b\\c\n.pdf", b"x");
        let text = String::from_utf8_lossy(&part.bytes).to_string();
        assert!(text.contains("filename=\"abc.pdf\""));
    }

    #[test]
    fn empty_file_name_gets_a_placeholder() {
        let part = pdf_file_body("  ", b"x");
        let text = String::from_utf8_lossy(&part.bytes).to_string();
        assert!(text.contains("filename=\"cv.pdf\""));
    }

    #[test]
    fn boundaries_differ_between_calls() {
        let a = pdf_file_body("cv.pdf", b"x");
        let b = pdf_file_body("cv.pdf", b"x");
        assert_ne!(a.content_type, b.content_type);
    }
}
