use crate::error::ConfigError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One entry of the `content` array: a glob over the source tree naming the
/// files scanned for utility classes.
///
/// Supports the subset the scanner actually uses: a `./` prefix, `**` across
/// directory levels, `*`/`?` within a segment and `{a,b}` alternation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentGlob {
	raw: String,
	matcher: Regex,
	extensions: Vec<String>,
}

impl ContentGlob {
	pub fn pattern(&self) -> &str {
		&self.raw
	}

	/// Extension alternatives named by the pattern's final segment.
	pub fn extensions(&self) -> &[String] {
		&self.extensions
	}

	pub fn covers_extension(&self, ext: &str) -> bool {
		self.extensions.iter().any(|e| e == ext)
	}

	/// Whether a repo-relative path would be scanned under this glob.
	pub fn matches(&self, path: &str) -> bool {
		let path = path.strip_prefix("./").unwrap_or(path);
		self.matcher.is_match(path)
	}

	fn compile(pattern: &str) -> Result<Regex, ConfigError> {
		let bad = |reason: &str| ConfigError::BadGlob {
			pattern: pattern.to_string(),
			reason: reason.to_string(),
		};

		let mut regex = String::from("^");
		let mut chars = pattern.strip_prefix("./").unwrap_or(pattern).chars().peekable();

		while let Some(c) = chars.next() {
			match c {
				'*' => {
					if chars.peek() == Some(&'*') {
						chars.next();
						// "**/" spans any number of directory levels, including none
						if chars.peek() == Some(&'/') {
							chars.next();
							regex.push_str("(?:.*/)?");
						} else {
							regex.push_str(".*");
						}
					} else {
						regex.push_str("[^/]*");
					}
				}
				'?' => regex.push_str("[^/]"),
				'{' => {
					let mut alternatives = String::new();
					let mut closed = false;

					for inner in chars.by_ref() {
						if inner == '}' {
							closed = true;
							break;
						}
						alternatives.push(inner);
					}

					if !closed {
						return Err(bad("unterminated alternation"));
					}
					if alternatives.contains('{') {
						return Err(bad("nested alternation"));
					}

					let escaped: Vec<String> = alternatives.split(',').map(|alt| regex::escape(alt.trim())).collect();
					regex.push_str(&format!("(?:{})", escaped.join("|")));
				}
				'}' => return Err(bad("unbalanced closing brace")),
				_ => regex.push_str(&regex::escape(&c.to_string())),
			}
		}

		regex.push('$');

		Regex::new(&regex).map_err(|e| bad(&e.to_string()))
	}

	fn extensions_of(pattern: &str) -> Vec<String> {
		let segment = pattern.rsplit('/').next().unwrap_or(pattern);

		let Some((_, ext)) = segment.rsplit_once('.') else {
			return Vec::new();
		};

		if let Some(list) = ext.strip_prefix('{').and_then(|e| e.strip_suffix('}')) {
			list.split(',').map(|alt| alt.trim().to_string()).collect()
		} else if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
			vec![ext.to_string()]
		} else {
			Vec::new()
		}
	}
}

impl FromStr for ContentGlob {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let matcher = Self::compile(s)?;

		Ok(Self {
			raw: s.to_string(),
			matcher,
			extensions: Self::extensions_of(s),
		})
	}
}

impl TryFrom<String> for ContentGlob {
	type Error = ConfigError;

	fn try_from(s: String) -> Result<Self, Self::Error> {
		s.parse()
	}
}

impl From<ContentGlob> for String {
	fn from(glob: ContentGlob) -> Self {
		glob.raw
	}
}

impl PartialEq for ContentGlob {
	fn eq(&self, other: &Self) -> bool {
		self.raw == other.raw
	}
}

impl fmt::Display for ContentGlob {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.raw)
	}
}
