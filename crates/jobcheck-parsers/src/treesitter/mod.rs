use std::path::Path;

use tree_sitter::{Language, Node, Parser, Tree};

pub struct TreeSitterParser {
    parser: Parser,
}

/// A parsed source file: the tree together with the text it was parsed from.
pub struct ParsedSource {
    tree: Tree,
    source: String,
    language: &'static str,
}

impl ParsedSource {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &[u8] {
        self.source.as_bytes()
    }

    pub fn language(&self) -> &'static str {
        self.language
    }
}

impl TreeSitterParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn parse(&mut self, lang_name: &str, source: &[u8]) -> Result<Tree, ParseError> {
        let lang = language_for_name(lang_name)?;
        self.parser
            .set_language(&lang)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        self.parser
            .parse(source, None)
            .ok_or(ParseError::ParseFailed)
    }

    /// Parse `source` and reject trees that contain syntax errors.
    ///
    /// tree-sitter always recovers, so a tree with ERROR or MISSING nodes would
    /// otherwise be analysed as if it were the program the author meant.
    pub fn parse_source(
        &mut self,
        lang_name: &str,
        source: &str,
    ) -> Result<ParsedSource, ParseError> {
        let language = canonical_language(lang_name)?;
        let tree = self.parse(language, source.as_bytes())?;
        if let Some(bad) = first_error(tree.root_node()) {
            let pos = bad.start_position();
            return Err(ParseError::Syntax {
                line: pos.row as u32 + 1,
                column: pos.column as u32 + 1,
            });
        }
        Ok(ParsedSource {
            tree,
            source: source.to_string(),
            language,
        })
    }

    /// Read and parse a script, picking the grammar from its extension.
    pub fn parse_path(&mut self, path: &Path) -> Result<ParsedSource, ParseError> {
        let lang = detect_language(path)
            .ok_or_else(|| ParseError::UnsupportedLanguage(path.display().to_string()))?;
        let source = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.parse_source(lang, &source)
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("language error: {0}")]
    Language(String),
    #[error("parse failed")]
    ParseFailed,
    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: u32, column: u32 },
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}

fn canonical_language(name: &str) -> Result<&'static str, ParseError> {
    match name {
        "typescript" => Ok("typescript"),
        "javascript" => Ok("javascript"),
        "tsx" => Ok("tsx"),
        other => Err(ParseError::UnsupportedLanguage(other.to_string())),
    }
}

fn language_for_name(name: &str) -> Result<Language, ParseError> {
    match name {
        "typescript" | "javascript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        other => Err(ParseError::UnsupportedLanguage(other.to_string())),
    }
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    // has_error() on a node whose children are all clean means the node itself is bad
    children.into_iter().find_map(first_error).or(Some(node))
}

pub fn detect_language(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" | "jsx" => Some("tsx"),
        "js" | "mjs" | "cjs" => Some("javascript"),
        _ => None,
    }
}
