// Text processing utilities

/// String and text manipulation utilities
pub mod string {
    /// Truncate text to a specified number of characters with ellipsis
    pub fn truncate(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else if max_chars <= 3 {
            "...".to_string()
        } else {
            let kept: String = text.chars().take(max_chars - 3).collect();
            format!("{}...", kept)
        }
    }

    /// Make a user-supplied name usable as a file stem: path separators and
    /// characters rejected by common filesystems become `-`.
    pub fn sanitize_file_stem(name: &str) -> String {
        name.trim()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
                c if c.is_control() => '-',
                c => c,
            })
            .collect::<String>()
            .trim_matches('.')
            .to_string()
    }
}

/// Color value helpers
pub mod color {
    /// Accepts `#RGB` and `#RRGGBB`.
    pub fn is_hex_color(value: &str) -> bool {
        match value.strip_prefix('#') {
            Some(digits) => {
                (digits.len() == 3 || digits.len() == 6)
                    && digits.chars().all(|c| c.is_ascii_hexdigit())
            }
            None => false,
        }
    }

    /// Upper-cases a valid hex color, adding the leading `#` when missing.
    pub fn normalize_hex(value: &str) -> Option<String> {
        let value = value.trim();
        let candidate = if value.starts_with('#') {
            value.to_string()
        } else {
            format!("#{}", value)
        };
        if is_hex_color(&candidate) {
            Some(candidate.to_uppercase())
        } else {
            None
        }
    }
}

/// Text formatting utilities
pub mod format {
    /// Format a table with aligned columns
    pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
        if headers.is_empty() || rows.is_empty() {
            return String::new();
        }

        // Calculate column widths
        let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let mut result = String::new();

        // Header row
        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, header)| format!("{:<width$}", header, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" | ");
        result.push_str(header_row.trim_end());
        result.push('\n');

        // Separator row
        let separator = widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-|-");
        result.push_str(&separator);
        result.push('\n');

        // Data rows
        for row in rows {
            let formatted_row = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let width = widths.get(i).copied().unwrap_or(0);
                    format!("{:<width$}", cell, width = width)
                })
                .collect::<Vec<_>>()
                .join(" | ");
            result.push_str(formatted_row.trim_end());
            result.push('\n');
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(string::truncate("Hello World", 8), "Hello...");
        assert_eq!(string::truncate("Hi", 10), "Hi");
        assert_eq!(string::truncate("héllo wörld", 6), "hél...");
    }

    #[test]
    fn test_sanitize_file_stem() {
        assert_eq!(string::sanitize_file_stem("Acme"), "Acme");
        assert_eq!(string::sanitize_file_stem("../etc/passwd"), "-etc-passwd");
        assert_eq!(string::sanitize_file_stem("  "), "");
        assert_eq!(string::sanitize_file_stem("What? Now"), "What- Now");
    }

    #[test]
    fn test_hex_colors() {
        assert!(color::is_hex_color("#3B82F6"));
        assert!(color::is_hex_color("#fff"));
        assert!(!color::is_hex_color("3B82F6"));
        assert!(!color::is_hex_color("#3B82F"));
        assert!(!color::is_hex_color("#GGGGGG"));

        assert_eq!(color::normalize_hex("3b82f6").as_deref(), Some("#3B82F6"));
        assert_eq!(color::normalize_hex("blue"), None);
    }

    #[test]
    fn test_format_table() {
        let rows = vec![vec!["1".to_string(), "Landing".to_string()]];
        let table = format::format_table(&["ID", "Name"], &rows);
        assert_eq!(table, "ID | Name\n---|--------\n1  | Landing\n");
    }
}
