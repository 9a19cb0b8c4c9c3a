// src/core/params.rs

use crate::models::{Bindings, Value};
use anyhow::{Result, anyhow, bail};
use lazy_static::lazy_static;
use regex::Regex;
use std::{fmt, ops::RangeInclusive};

lazy_static! {
    static ref BARE_ID_RE: Regex = Regex::new(r"^[0-9A-Za-z]{22}$").unwrap();
}

lazy_static! {
    static ref URI_RE: Regex =
        Regex::new(r"^spotify:(track|artist|album|playlist):([0-9A-Za-z]{22})$").unwrap();
}

/// Validates a raw value and binds it into the per-dispatch record.
pub type ParseFn = Box<dyn Fn(&str, &mut Bindings) -> Result<()>>;

/// The kind of spotify object an id parameter refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// A track.
    Track,
    /// An artist.
    Artist,
}

impl IdKind {
    /// The kind as it appears in a URI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Artist => "artist",
        }
    }
}

/// One named value a leaf command accepts.
///
/// A token matches when it equals one of the parameter's names (bound value is
/// empty) or starts with `name=` (bound value is everything after the `=`).
/// Names are tried aliases first, canonical name last.
pub struct Param {
    name: String,
    aliases: Vec<String>,
    help: String,
    implicit: bool,
    parse: ParseFn,
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Param")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("help", &self.help)
            .field("implicit", &self.implicit)
            .finish_non_exhaustive()
    }
}

impl Param {
    /// A parameter with a custom parse callback.
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        parse: impl Fn(&str, &mut Bindings) -> Result<()> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            help: help.into(),
            implicit: false,
            parse: Box::new(parse),
        }
    }

    /// A free-form text value. A bare `name` binds an empty text.
    pub fn text(name: &str, help: impl Into<String>) -> Self {
        let key = name.to_string();
        Self::new(name, help, move |value, bindings| {
            bindings.set(key.clone(), Value::Text(value.to_string()));
            Ok(())
        })
    }

    /// An integer in `range`. Implicit: an absent or bare parameter binds `default`.
    pub fn int(name: &str, help: impl Into<String>, default: i64, range: RangeInclusive<i64>) -> Self {
        let key = name.to_string();
        Self::new(name, help, move |value, bindings| {
            if value.is_empty() {
                bindings.set(key.clone(), Value::Int(default));
                return Ok(());
            }
            let n: i64 = value
                .trim()
                .parse()
                .map_err(|_| anyhow!(t!("param.error.not_a_number"), name = key))?;
            if !range.contains(&n) {
                bail!(
                    t!("param.error.out_of_range"),
                    name = key,
                    min = range.start(),
                    max = range.end()
                );
            }
            bindings.set(key.clone(), Value::Int(n));
            Ok(())
        })
        .implicit()
    }

    /// A boolean switch: the bare name sets it, `name=value` is rejected.
    pub fn flag(name: &str, help: impl Into<String>) -> Self {
        let key = name.to_string();
        Self::new(name, help, move |value, bindings| {
            if !value.is_empty() {
                bail!(t!("param.error.flag_takes_no_value"), name = key);
            }
            bindings.set(key.clone(), Value::Flag);
            Ok(())
        })
    }

    /// A spotify id, given bare or as a `spotify:<kind>:<id>` URI. The bare id is bound.
    /// An empty value is accepted and means "whatever is currently playing".
    pub fn spotify_id(name: &str, help: impl Into<String>, kind: IdKind) -> Self {
        let key = name.to_string();
        Self::new(name, help, move |value, bindings| {
            let id = parse_spotify_id(value, kind)?;
            bindings.set(key.clone(), Value::Text(id.to_string()));
            Ok(())
        })
    }

    /// Adds another name, tried before the canonical one.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Runs the parse callback with an empty value when the parameter is absent.
    pub fn implicit(mut self) -> Self {
        self.implicit = true;
        self
    }

    /// Rejects this parameter when `other` is already bound by the time it is parsed.
    ///
    /// Parameters are parsed in declaration order, so only the later-declared
    /// side of a conflict ever sees the other one bound. Declare it on both
    /// sides to reject the pair whichever order the command lists them in.
    pub fn conflicts_with(mut self, other: &str) -> Self {
        let other = other.to_string();
        let name = self.name.clone();
        let inner = self.parse;
        self.parse = Box::new(move |value, bindings| {
            if bindings.is_bound(&other) {
                bail!(t!("param.error.conflict"), name = name, other = other);
            }
            inner(value, bindings)
        });
        self
    }

    /// The canonical name, also the key it binds under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative names in declaration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// One-line description shown in usage.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Every name this parameter answers to, in matching order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aliases
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
    }

    /// Returns the bound value if `token` addresses this parameter.
    fn match_token<'t>(&self, token: &'t str) -> Option<&'t str> {
        self.names().find_map(|name| {
            if token == name {
                Some("")
            } else {
                token.strip_prefix(name).and_then(|rest| rest.strip_prefix('='))
            }
        })
    }

    /// Pulls this parameter's token out of `tokens` and parses it into `bindings`.
    ///
    /// Only the first matching token is consumed; everything else comes back
    /// in its original order. A parse failure is returned as-is and no
    /// remaining tokens are produced.
    pub fn consume(&self, tokens: &[String], bindings: &mut Bindings) -> Result<Vec<String>> {
        let mut remaining = Vec::with_capacity(tokens.len());
        let mut matched: Option<&str> = None;

        for token in tokens {
            if matched.is_some() {
                remaining.push(token.clone());
                continue;
            }
            match self.match_token(token) {
                Some(value) => {
                    log::debug!("Param '{}' matched token '{}'", self.name, token);
                    bindings.record_raw(&self.name, token);
                    matched = Some(value);
                }
                None => remaining.push(token.clone()),
            }
        }

        match matched {
            Some(value) => (self.parse)(value, bindings)?,
            None if self.implicit => {
                log::debug!("Param '{}' absent, applying implicit default", self.name);
                (self.parse)("", bindings)?;
            }
            None => {}
        }

        Ok(remaining)
    }
}

/// Normalizes a bare id or a `spotify:<kind>:<id>` URI to the bare id.
pub fn parse_spotify_id(value: &str, kind: IdKind) -> Result<&str> {
    if value.is_empty() || BARE_ID_RE.is_match(value) {
        return Ok(value);
    }
    let caps = URI_RE
        .captures(value)
        .ok_or_else(|| anyhow!(t!("param.error.invalid_id"), value = value, kind = kind.as_str()))?;
    let found = caps.get(1).map_or("", |m| m.as_str());
    if found != kind.as_str() {
        bail!(
            t!("param.error.wrong_uri_kind"),
            value = value,
            found = found,
            kind = kind.as_str()
        );
    }
    caps.get(2)
        .map(|m| m.as_str())
        .ok_or_else(|| anyhow!(t!("param.error.invalid_id"), value = value, kind = kind.as_str()))
}

// MARK: --- UNIT TESTS ---

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK_ID: &str = "4uLU6hMCjMI75M1A2tKUQC";

    fn to_cli_params(params: &[&str]) -> Vec<String> {
        params.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_consume_exact_match_binds_empty_value() {
        let param = Param::text("artist", "artist").alias("a");
        let mut bindings = Bindings::new();
        let remaining = param
            .consume(&to_cli_params(&["artist", "n=20"]), &mut bindings)
            .unwrap();
        assert_eq!(remaining, vec!["n=20"]);
        assert_eq!(bindings.text("artist"), Some(""));
        assert_eq!(bindings.raw("artist"), Some("artist"));
    }

    #[test]
    fn test_consume_alias_with_value() {
        let param = Param::text("artist", "artist").alias("a");
        let mut bindings = Bindings::new();
        let remaining = param
            .consume(&to_cli_params(&["a=chavez"]), &mut bindings)
            .unwrap();
        assert!(remaining.is_empty());
        assert_eq!(bindings.text("artist"), Some("chavez"));
        assert_eq!(bindings.raw("artist"), Some("a=chavez"));
    }

    #[test]
    fn test_consume_value_keeps_later_equals_signs() {
        let param = Param::text("query", "query");
        let mut bindings = Bindings::new();
        param
            .consume(&to_cli_params(&["query=a=b"]), &mut bindings)
            .unwrap();
        assert_eq!(bindings.text("query"), Some("a=b"));
    }

    #[test]
    fn test_consume_does_not_match_on_bare_prefix() {
        let param = Param::text("artist", "artist").alias("a");
        let mut bindings = Bindings::new();
        let remaining = param
            .consume(&to_cli_params(&["artists=x", "ab"]), &mut bindings)
            .unwrap();
        assert_eq!(remaining, vec!["artists=x", "ab"]);
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_consume_only_first_match_is_taken() {
        let param = Param::text("artist", "artist").alias("a");
        let mut bindings = Bindings::new();
        let remaining = param
            .consume(
                &to_cli_params(&["x=1", "a=first", "y=2", "artist=second", "z=3"]),
                &mut bindings,
            )
            .unwrap();
        assert_eq!(bindings.text("artist"), Some("first"));
        assert_eq!(remaining, vec!["x=1", "y=2", "artist=second", "z=3"]);
    }

    #[test]
    fn test_consume_preserves_unmatched_order() {
        let param = Param::text("artist", "artist");
        let input = to_cli_params(&["c", "b", "artist=x", "a", "d"]);
        let mut bindings = Bindings::new();
        let remaining = param.consume(&input, &mut bindings).unwrap();
        let expected: Vec<String> = input.into_iter().filter(|t| t != "artist=x").collect();
        assert_eq!(remaining, expected);
    }

    #[test]
    fn test_consume_absent_param_does_not_parse() {
        let param = Param::text("artist", "artist");
        let mut bindings = Bindings::new();
        let remaining = param.consume(&to_cli_params(&[]), &mut bindings).unwrap();
        assert!(remaining.is_empty());
        assert!(!bindings.is_bound("artist"));
    }

    #[test]
    fn test_implicit_param_applies_default_when_absent() {
        let param = Param::int("length", "length", 10, 1..=50).alias("n");
        let mut bindings = Bindings::new();
        param.consume(&to_cli_params(&[]), &mut bindings).unwrap();
        assert_eq!(bindings.int("length"), Some(10));
        assert_eq!(bindings.raw("length"), None);
    }

    #[test]
    fn test_int_param_parses_and_checks_range() {
        let param = Param::int("length", "length", 10, 1..=50).alias("n");

        let mut bindings = Bindings::new();
        param.consume(&to_cli_params(&["n=20"]), &mut bindings).unwrap();
        assert_eq!(bindings.int("length"), Some(20));

        let mut bindings = Bindings::new();
        let err = param
            .consume(&to_cli_params(&["n=51"]), &mut bindings)
            .unwrap_err();
        assert!(err.to_string().contains("between 1 and 50"));

        let mut bindings = Bindings::new();
        let err = param
            .consume(&to_cli_params(&["length=lots"]), &mut bindings)
            .unwrap_err();
        assert!(err.to_string().contains("must be a number"));
    }

    #[test]
    fn test_flag_param_rejects_value() {
        let param = Param::flag("public", "public");

        let mut bindings = Bindings::new();
        param.consume(&to_cli_params(&["public"]), &mut bindings).unwrap();
        assert!(bindings.flag("public"));

        let mut bindings = Bindings::new();
        let result = param.consume(&to_cli_params(&["public=yes"]), &mut bindings);
        assert!(result.unwrap_err().to_string().contains("does not take a value"));
    }

    #[test]
    fn test_conflict_is_checked_before_parsing() {
        let param = Param::text("track", "track").conflicts_with("artist");
        let mut bindings = Bindings::new();
        bindings.set("artist", Value::Text("chavez".to_string()));
        let err = param
            .consume(&to_cli_params(&["track=abc"]), &mut bindings)
            .unwrap_err();
        assert!(err.to_string().contains("but not both"));
        assert!(!bindings.is_bound("track"));
    }

    #[test]
    fn test_spotify_id_accepts_bare_id_and_uri() {
        assert_eq!(parse_spotify_id(TRACK_ID, IdKind::Track).unwrap(), TRACK_ID);
        let uri = format!("spotify:track:{}", TRACK_ID);
        assert_eq!(parse_spotify_id(&uri, IdKind::Track).unwrap(), TRACK_ID);
        assert_eq!(parse_spotify_id("", IdKind::Track).unwrap(), "");
    }

    #[test]
    fn test_spotify_id_param_binds_bare_artist_id() {
        let param = Param::spotify_id("artist", "artist", IdKind::Artist);
        let mut bindings = Bindings::new();
        let token = format!("artist=spotify:artist:{}", TRACK_ID);
        param.consume(&[token], &mut bindings).unwrap();
        assert_eq!(bindings.text("artist"), Some(TRACK_ID));
    }

    #[test]
    fn test_spotify_id_rejects_wrong_kind_and_garbage() {
        let uri = format!("spotify:artist:{}", TRACK_ID);
        let err = parse_spotify_id(&uri, IdKind::Track).unwrap_err();
        assert!(err.to_string().contains("expected a track"));

        let err = parse_spotify_id("a2f", IdKind::Track).unwrap_err();
        assert!(err.to_string().contains("not a valid spotify track id"));
    }

    #[test]
    fn test_names_are_aliases_then_name() {
        let param = Param::text("length", "length").alias("n").alias("len");
        let names: Vec<&str> = param.names().collect();
        assert_eq!(names, vec!["n", "len", "length"]);
    }
}
