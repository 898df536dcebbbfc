//! Minimaler WKT-Reader für die Geometrien der Identify-Ergebnisse.
//!
//! Unterstützt POINT, MULTIPOINT, LINESTRING, MULTILINESTRING, POLYGON,
//! MULTIPOLYGON und GEOMETRYCOLLECTION (als [`Geometry::Unknown`]),
//! inklusive `EMPTY`, Z/M-Dimensionen (zusätzliche Ordinaten werden
//! verworfen) und einem optionalen EWKT-Präfix `SRID=…;`.

use glam::DVec2;
use thiserror::Error;

use super::geometry::{Geometry, Ring};

/// Fehler beim Lesen eines WKT-Strings.
#[derive(Debug, Error, PartialEq)]
pub enum WktError {
    #[error("unerwartetes Ende der WKT-Eingabe")]
    UnexpectedEnd,
    #[error("unerwartetes Token '{found}', erwartet {expected}")]
    UnexpectedToken { found: String, expected: &'static str },
    #[error("unbekannter Geometrietyp '{0}'")]
    UnknownType(String),
    #[error("ungültige Zahl '{0}'")]
    InvalidNumber(String),
    #[error("Koordinate mit {0} Ordinaten (mindestens 2 erwartet)")]
    TooFewOrdinates(usize),
    #[error("zusätzliche Eingabe nach Geometrieende: '{0}'")]
    TrailingInput(String),
    #[error("GEOMETRYCOLLECTION tiefer als {0} Ebenen verschachtelt")]
    TooDeep(usize),
}

/// Maximale Verschachtelungstiefe von GEOMETRYCOLLECTIONs.
const MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Number(f64),
    LParen,
    RParen,
    Comma,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Word(w) => w.clone(),
            Token::Number(n) => n.to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Comma => ",".to_string(),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, WktError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' | '[' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' | ']' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            ',' => {
                chars.next();
                tokens.push(Token::Comma);
            }
            c if c.is_ascii_alphabetic() => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if !c.is_ascii_alphabetic() {
                        break;
                    }
                    end = i + c.len_utf8();
                    chars.next();
                }
                tokens.push(Token::Word(input[start..end].to_ascii_uppercase()));
            }
            c if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => {
                let mut end = start;
                let mut prev = '\0';
                while let Some(&(i, c)) = chars.peek() {
                    let exponent_sign = matches!(c, '-' | '+') && matches!(prev, 'e' | 'E');
                    let part_of_number = c.is_ascii_digit()
                        || matches!(c, '.' | 'e' | 'E')
                        || exponent_sign
                        || (i == start && matches!(c, '-' | '+'));
                    if !part_of_number {
                        break;
                    }
                    end = i + c.len_utf8();
                    prev = c;
                    chars.next();
                }
                let text = &input[start..end];
                let value = text
                    .parse::<f64>()
                    .map_err(|_| WktError::InvalidNumber(text.to_string()))?;
                tokens.push(Token::Number(value));
            }
            other => {
                return Err(WktError::UnexpectedToken {
                    found: other.to_string(),
                    expected: "WKT-Token",
                });
            }
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<Token, WktError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(WktError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, expected: Token, label: &'static str) -> Result<(), WktError> {
        let token = self.next()?;
        if token == expected {
            Ok(())
        } else {
            Err(WktError::UnexpectedToken {
                found: token.describe(),
                expected: label,
            })
        }
    }

    fn word(&mut self) -> Result<String, WktError> {
        match self.next()? {
            Token::Word(w) => Ok(w),
            other => Err(WktError::UnexpectedToken {
                found: other.describe(),
                expected: "Geometrietyp",
            }),
        }
    }

    /// Überspringt Dimensions-Tags (Z, M, ZM) und erkennt `EMPTY`.
    /// Gibt `true` zurück, wenn die Geometrie leer ist.
    fn dimension_and_empty(&mut self) -> Result<bool, WktError> {
        if let Some(Token::Word(w)) = self.peek() {
            if matches!(w.as_str(), "Z" | "M" | "ZM") {
                self.pos += 1;
            }
        }
        if let Some(Token::Word(w)) = self.peek() {
            if w == "EMPTY" {
                self.pos += 1;
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn coordinate(&mut self) -> Result<DVec2, WktError> {
        let mut ordinates = Vec::with_capacity(4);
        while let Some(Token::Number(n)) = self.peek() {
            ordinates.push(*n);
            self.pos += 1;
        }
        match ordinates.as_slice() {
            [x, y, ..] => Ok(DVec2::new(*x, *y)),
            [] => match self.peek() {
                Some(token) => Err(WktError::UnexpectedToken {
                    found: token.describe(),
                    expected: "Koordinate",
                }),
                None => Err(WktError::UnexpectedEnd),
            },
            _ => Err(WktError::TooFewOrdinates(ordinates.len())),
        }
    }

    /// Liest `(item, item, …)`.
    fn list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, WktError>,
    ) -> Result<Vec<T>, WktError> {
        self.expect(Token::LParen, "'('")?;
        let mut items = vec![item(self)?];
        loop {
            match self.next()? {
                Token::Comma => items.push(item(self)?),
                Token::RParen => return Ok(items),
                other => {
                    return Err(WktError::UnexpectedToken {
                        found: other.describe(),
                        expected: "',' oder ')'",
                    });
                }
            }
        }
    }

    fn line(&mut self) -> Result<Vec<DVec2>, WktError> {
        self.list(Self::coordinate)
    }

    fn polygon(&mut self) -> Result<Vec<Ring>, WktError> {
        self.list(Self::line)
    }

    /// MULTIPOINT erlaubt `(1 2, 3 4)` und `((1 2), (3 4))`.
    fn multi_point_member(&mut self) -> Result<DVec2, WktError> {
        if self.peek() == Some(&Token::LParen) {
            self.pos += 1;
            let p = self.coordinate()?;
            self.expect(Token::RParen, "')'")?;
            Ok(p)
        } else {
            self.coordinate()
        }
    }

    fn geometry(&mut self) -> Result<Geometry, WktError> {
        let kind = self.word()?;
        let empty = self.dimension_and_empty()?;

        let geometry = match kind.as_str() {
            "POINT" if empty => Geometry::MultiPoint(Vec::new()),
            "POINT" => {
                self.expect(Token::LParen, "'('")?;
                let p = self.coordinate()?;
                self.expect(Token::RParen, "')'")?;
                Geometry::Point(p)
            }
            "MULTIPOINT" if empty => Geometry::MultiPoint(Vec::new()),
            "MULTIPOINT" => Geometry::MultiPoint(self.list(Self::multi_point_member)?),
            "LINESTRING" if empty => Geometry::LineString(Vec::new()),
            "LINESTRING" => Geometry::LineString(self.line()?),
            "MULTILINESTRING" if empty => Geometry::MultiLineString(Vec::new()),
            "MULTILINESTRING" => Geometry::MultiLineString(self.list(Self::line)?),
            "POLYGON" if empty => Geometry::Polygon(Vec::new()),
            "POLYGON" => Geometry::Polygon(self.polygon()?),
            "MULTIPOLYGON" if empty => Geometry::MultiPolygon(Vec::new()),
            "MULTIPOLYGON" => Geometry::MultiPolygon(self.list(Self::polygon)?),
            "GEOMETRYCOLLECTION" => {
                if !empty {
                    if self.depth >= MAX_DEPTH {
                        return Err(WktError::TooDeep(MAX_DEPTH));
                    }
                    self.depth += 1;
                    self.list(Self::geometry)?;
                    self.depth -= 1;
                }
                Geometry::Unknown("GeometryCollection".to_string())
            }
            _ => return Err(WktError::UnknownType(kind)),
        };

        Ok(geometry)
    }
}

/// Liest eine Geometrie aus einem WKT- oder EWKT-String.
///
/// Ein leerer POINT wird als leerer MULTIPOINT geliefert, damit er
/// keinen repräsentativen Punkt hat.
pub fn parse_wkt(input: &str) -> Result<Geometry, WktError> {
    let body = match input.trim_start().split_once(';') {
        Some((prefix, rest)) if prefix.trim().to_ascii_uppercase().starts_with("SRID=") => rest,
        _ => input,
    };

    let mut parser = Parser {
        tokens: tokenize(body)?,
        pos: 0,
        depth: 0,
    };
    let geometry = parser.geometry()?;

    if let Some(token) = parser.peek() {
        return Err(WktError::TrailingInput(token.describe()));
    }
    Ok(geometry)
}
