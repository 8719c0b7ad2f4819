use crate::types::TemplateRepository;

/// The display document shown in the panel: an ordered list of lines,
/// replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Render the repository list into a display document.
///
/// Pure: same input, same document. The empty list renders a placeholder
/// rather than an empty table.
pub fn render(repositories: &[TemplateRepository]) -> Document {
    let mut lines = vec![format!("Template repositories ({})", repositories.len())];
    lines.push(String::new());

    if repositories.is_empty() {
        lines.push("  (no template repositories registered)".to_owned());
        return Document { lines };
    }

    let name_width = repositories
        .iter()
        .map(|r| display_name(r).chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    lines.push(format!("  ON  PROT  {:<name_width$}  URL", "NAME"));
    for repo in repositories {
        let enabled = if repo.enabled { "[x]" } else { "[ ]" };
        let protected = if repo.protected { "yes " } else { "    " };
        let mut line = format!(
            "  {enabled} {protected} {:<name_width$}  {}",
            display_name(repo),
            repo.url
        );
        if !repo.description.is_empty() {
            line.push_str("  - ");
            line.push_str(&repo.description);
        }
        lines.push(line);
    }

    Document { lines }
}

/// Fall back to the URL when the backend did not provide a display name.
fn display_name(repo: &TemplateRepository) -> &str {
    if repo.name.is_empty() {
        &repo.url
    } else {
        &repo.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(url: &str, name: &str, enabled: bool) -> TemplateRepository {
        TemplateRepository {
            url: url.to_owned(),
            name: name.to_owned(),
            description: String::new(),
            enabled,
            protected: false,
        }
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let doc = render(&[]);
        assert!(doc.to_text().contains("no template repositories"));
    }

    #[test]
    fn one_line_per_repository_plus_header() {
        let repos = vec![
            repo("https://a/index.json", "a", true),
            repo("https://b/index.json", "b", false),
        ];
        let doc = render(&repos);
        // title + blank + column header + 2 rows
        assert_eq!(doc.lines().len(), 5);
        assert!(doc.lines()[3].contains("[x]"));
        assert!(doc.lines()[4].contains("[ ]"));
    }

    #[test]
    fn rendering_is_pure() {
        let repos = vec![repo("https://a/index.json", "a", true)];
        assert_eq!(render(&repos), render(&repos));
    }

    #[test]
    fn nameless_repository_falls_back_to_url() {
        let doc = render(&[repo("https://a/index.json", "", false)]);
        assert!(doc.lines()[3].matches("https://a/index.json").count() >= 2);
    }
}
