//! Path templates with positional placeholders.

use crate::Error;

/// Splits `template` into URL segments, substituting each `{name}` placeholder
/// with the next value from `args`.
///
/// Values are only checked for presence here. Percent-encoding happens when the
/// segments are pushed onto the base URL.
pub fn render_path(template: &str, args: &[&str]) -> Result<Vec<String>, Error> {
    let mut args = args.iter();
    let mut segments = Vec::new();
    for segment in template.split('/').filter(|s| !s.is_empty()) {
        match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => {
                let value = args.next().ok_or_else(|| {
                    Error::Construction(format!(
                        "missing path parameter `{}` for {}",
                        name, template
                    ))
                })?;
                if value.trim().is_empty() {
                    return Err(Error::Construction(format!(
                        "path parameter `{}` must not be empty",
                        name
                    )));
                }
                segments.push(value.to_string());
            }
            None => segments.push(segment.to_string()),
        }
    }
    if args.next().is_some() {
        return Err(Error::Construction(format!(
            "too many path parameters for {}",
            template
        )));
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::render_path;

    #[test]
    fn substitutes_placeholders_in_order() {
        let segments = render_path("/media/{media_name}/download", &["voicemail.mp3"]).unwrap();
        assert_eq!(segments, vec!["media", "voicemail.mp3", "download"]);
    }

    #[test]
    fn static_paths_have_no_args() {
        assert_eq!(render_path("/balance", &[]).unwrap(), vec!["balance"]);
    }

    #[test]
    fn empty_or_missing_args_are_rejected() {
        assert!(render_path("/phone_numbers/{id}", &[""]).is_err());
        assert!(render_path("/phone_numbers/{id}", &[]).is_err());
        assert!(render_path("/balance", &["extra"]).is_err());
    }
}
