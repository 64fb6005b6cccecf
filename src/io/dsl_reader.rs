use super::{FrameworkReader, WarningHandler};
use crate::aba::{ABAFramework, Rule};
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{BufRead, BufReader, Read};

lazy_static! {
    static ref LANGUAGE_LINE_PATTERN: Regex = Regex::new(r"^L:(.*)$").unwrap();
    static ref ASSUMPTIONS_LINE_PATTERN: Regex = Regex::new(r"^A:(.*)$").unwrap();
    static ref CONTRARY_LINE_PATTERN: Regex = Regex::new(r"^C\(([^):]*)\)[^:]*:(.*)$").unwrap();
    static ref RULE_LINE_PATTERN: Regex = Regex::new(r"^\[(.*?)\]:(.*)$").unwrap();
    static ref PREFERENCE_LINE_PATTERN: Regex = Regex::new(r"^PREF:(.*)$").unwrap();
}

const RULE_ARROW: &str = "<-";

/// Reads a list of sentences.
///
/// If the text begins with an opening bracket and contains a closing one, only the text between them is considered.
/// Sentences are separated by commas; empty sentences are discarded.
fn read_list(s: &str) -> Vec<String> {
    let s = s.trim();
    let inner = match (s.strip_prefix('['), s.find(']')) {
        (Some(_), Some(end)) => &s[1..end],
        _ => s,
    };
    inner
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

enum Declaration {
    Language(Vec<String>),
    Assumptions(Vec<String>),
    Contrary(String, String),
    Rule(String, String, Vec<String>),
    Preferences(Vec<String>),
}

fn read_declaration(line: &str) -> Option<Declaration> {
    if let Some(c) = LANGUAGE_LINE_PATTERN.captures(line) {
        return Some(Declaration::Language(read_list(&c[1])));
    }
    if let Some(c) = ASSUMPTIONS_LINE_PATTERN.captures(line) {
        return Some(Declaration::Assumptions(read_list(&c[1])));
    }
    if let Some(c) = CONTRARY_LINE_PATTERN.captures(line) {
        let assumption = c[1].trim();
        if assumption.is_empty() {
            return None;
        }
        return Some(Declaration::Contrary(
            assumption.to_string(),
            c[2].trim().to_string(),
        ));
    }
    if let Some(c) = RULE_LINE_PATTERN.captures(line) {
        let rule_id = c[1].trim().to_string();
        let rest = &c[2];
        let (head, body) = match rest.split_once(RULE_ARROW) {
            Some((head, body)) => (head.trim(), read_list(body)),
            None => (rest.trim(), Vec::new()),
        };
        return Some(Declaration::Rule(rule_id, head.to_string(), body));
    }
    if let Some(c) = PREFERENCE_LINE_PATTERN.captures(line) {
        let chain = c[1]
            .split('>')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        return Some(Declaration::Preferences(chain));
    }
    None
}

/// A reader for the textual ABA+ format.
///
/// This object is used to read an [`ABAFramework`] labelled by [String]s.
/// The format is line-oriented; blank lines are ignored, as are lines that match no declaration (a warning is raised for them).
/// Nothing is checked about the consistency of the declarations:
/// rules and contraries may refer to undeclared sentences.
///
/// # Format
///
/// The following content declares a framework with five sentences, two of them being assumptions,
/// one contrary, two rules (the second one being a fact) and the preference of `a` over `b`.
///
/// ```text
/// L: [a,b,p,q,r]
/// A: [a,b]
/// C(a): p
/// [r1]: p <- q,b
/// [r2]: q
/// PREF: a > b
/// ```
///
/// A new `L:` (resp. `A:`) line replaces the previous language (resp. assumptions).
/// A new rule with an existing identifier replaces the previous rule.
/// A `PREF:` line with more than two sentences, such as `PREF: a > b > c`, declares the adjacent pairs `(a, b)` and `(b, c)` only.
/// The assumption of a `C(...)` line may not contain `:` or `)`; a line like `C(ab:x): t` is rejected with a warning
/// rather than being split on its first colon.
///
/// # Example
///
/// ```
/// # use abaplus::io::{DslReader, FrameworkReader};
/// let reader = DslReader::default();
/// let framework = reader.read(&mut "L: [a,p]\nA: [a]\nC(a): p".as_bytes()).unwrap();
/// assert_eq!(Some(&"p".to_string()), framework.contrary_of(&"a".to_string()));
/// ```
#[derive(Default)]
pub struct DslReader {
    warning_handlers: Vec<WarningHandler>,
}

impl DslReader {
    fn warn(&self, line_index: usize, message: String) {
        self.warning_handlers
            .iter()
            .for_each(|h| h(line_index, message.clone()));
    }
}

impl FrameworkReader for DslReader {
    fn read(&self, reader: &mut dyn Read) -> Result<ABAFramework<String>> {
        let br = BufReader::new(reader);
        let mut framework = ABAFramework::new();
        for (i, line) in br.lines().enumerate() {
            let l = line.with_context(|| format!("while reading line with index {}", i))?;
            let l = l.trim();
            if l.is_empty() {
                continue;
            }
            match read_declaration(l) {
                Some(Declaration::Language(sentences)) => framework.set_language(sentences),
                Some(Declaration::Assumptions(sentences)) => framework.set_assumptions(sentences),
                Some(Declaration::Contrary(assumption, contrary)) => {
                    framework.set_contrary(assumption, contrary)
                }
                Some(Declaration::Rule(rule_id, head, body)) => {
                    framework.add_rule(rule_id, Rule::new(head, body))
                }
                Some(Declaration::Preferences(chain)) => framework.add_preference_chain(&chain),
                None => self.warn(i, format!(r#"ignoring unrecognized line "{}""#, l)),
            }
        }
        Ok(framework)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    fn s(label: &str) -> String {
        label.to_string()
    }

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|l| s(l)).collect()
    }

    #[test]
    fn test_ok() {
        let str_framework = r#"
        L: [a,b,p,q,r]
        A: [a, b]
        C(a): p
        C(b): r
        [r1]: p <- q,b
        [r2]: q
        PREF: a > b
        "#;
        let reader = DslReader::default();
        let framework = reader.read(&mut str_framework.as_bytes()).unwrap();
        assert_eq!(
            strings(&["a", "b", "p", "q", "r"]),
            framework.language().iter().cloned().collect::<Vec<_>>()
        );
        assert_eq!(
            strings(&["a", "b"]),
            framework.assumptions().iter().cloned().collect::<Vec<_>>()
        );
        assert_eq!(Some(&s("p")), framework.contrary_of(&s("a")));
        assert_eq!(Some(&s("r")), framework.contrary_of(&s("b")));
        let r1 = framework.get_rule("r1").unwrap();
        assert_eq!(&s("p"), r1.head());
        assert_eq!(&strings(&["q", "b"]), r1.body());
        assert!(framework.get_rule("r2").unwrap().is_fact());
        assert!(framework.preferences().is_preferred(&s("a"), &s("b")));
    }

    #[test]
    fn test_lists_without_brackets() {
        let reader = DslReader::default();
        let framework = reader
            .read(&mut "L: a, b ,,c\nA: a".as_bytes())
            .unwrap();
        assert_eq!(
            strings(&["a", "b", "c"]),
            framework.language().iter().cloned().collect::<Vec<_>>()
        );
        assert!(framework.is_assumption(&s("a")));
    }

    #[test]
    fn test_bracketed_body() {
        let reader = DslReader::default();
        let framework = reader.read(&mut "[r1]: p <- [a, b]".as_bytes()).unwrap();
        assert_eq!(&strings(&["a", "b"]), framework.get_rule("r1").unwrap().body());
    }

    #[test]
    fn test_redeclarations_replace() {
        let str_framework = "L: [a,b]\nL: [c]\n[r1]: p <- a\n[r1]: q <- b";
        let reader = DslReader::default();
        let framework = reader.read(&mut str_framework.as_bytes()).unwrap();
        assert_eq!(
            strings(&["c"]),
            framework.language().iter().cloned().collect::<Vec<_>>()
        );
        assert_eq!(1, framework.n_rules());
        assert_eq!(&s("q"), framework.get_rule("r1").unwrap().head());
    }

    #[test]
    fn test_preference_chain() {
        let reader = DslReader::default();
        let framework = reader
            .read(&mut "PREF: a > b > c\nPREF:".as_bytes())
            .unwrap();
        let pairs = framework.preferences().iter().cloned().collect::<Vec<_>>();
        assert_eq!(vec![(s("a"), s("b")), (s("b"), s("c"))], pairs);
        assert!(!framework.preferences().is_preferred(&s("a"), &s("c")));
    }

    #[test]
    fn test_rule_spaces_trimmed() {
        let reader = DslReader::default();
        let framework = reader.read(&mut "[r 1 ]:  p  <- a".as_bytes()).unwrap();
        let r = framework.get_rule("r 1").unwrap();
        assert_eq!(&s("p"), r.head());
        assert_eq!(&strings(&["a"]), r.body());
    }

    #[test]
    fn test_malformed_lines_warned_and_dropped() {
        let str_framework = "L: [a]\nthis is not a declaration\n\nC(): x\nA [a]";
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let mut reader = DslReader::default();
        reader.add_warning_handler(Box::new(move |i, _| warnings_clone.borrow_mut().push(i)));
        let framework = reader.read(&mut str_framework.as_bytes()).unwrap();
        assert_eq!(vec![1, 3, 4], *warnings.borrow());
        assert_eq!(1, framework.language().len());
        assert!(framework.assumptions().is_empty());
        assert!(framework.contraries().is_empty());
    }

    #[test]
    fn test_contrary_with_colon_in_assumption_rejected() {
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let mut reader = DslReader::default();
        reader.add_warning_handler(Box::new(move |i, _| warnings_clone.borrow_mut().push(i)));
        let framework = reader
            .read(&mut "L: [t]
C(ab:x): t
C(a)b: t".as_bytes())
            .unwrap();
        assert_eq!(vec![1], *warnings.borrow());
        assert_eq!(1, framework.contraries().len());
        assert_eq!(Some(&s("t")), framework.contrary_of(&s("a")));
    }

    #[test]
    fn test_undeclared_references_kept() {
        let reader = DslReader::default();
        let framework = reader
            .read(&mut "L: [p]\nC(z): y\n[r1]: x <- w".as_bytes())
            .unwrap();
        assert_eq!(Some(&s("y")), framework.contrary_of(&s("z")));
        assert_eq!(&s("x"), framework.get_rule("r1").unwrap().head());
    }

    #[test]
    fn test_read_list() {
        assert!(read_list("").is_empty());
        assert!(read_list("[]").is_empty());
        assert_eq!(strings(&["a", "b"]), read_list(" [a, b] trailing"));
        assert_eq!(strings(&["[a", "b"]), read_list("[a, b"));
    }
}
