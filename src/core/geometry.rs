//! Vektor-Geometrien und Bestimmung eines repräsentativen Punkts.
//!
//! Der repräsentative Punkt dient als Marker-Position und Pan-Ziel eines
//! Identify-Ergebnisses. Die Regeln je Geometrieart entsprechen denen des
//! Web-Viewers, damit Marker an derselben Stelle landen wie bisher.

use glam::DVec2;
use serde::Serialize;

/// Geometrieart einer [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    Circle,
    Unknown,
}

impl GeometryKind {
    /// Name der Geometrieart wie vom Host-Viewer verwendet.
    pub fn name(self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::Circle => "Circle",
            GeometryKind::Unknown => "Unknown",
        }
    }
}

/// Ring eines Polygons (geschlossen oder offen, der Schlusspunkt ist optional).
pub type Ring = Vec<DVec2>;

/// Vektor-Geometrie in Karten-Koordinaten der aktiven Projektion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(DVec2),
    MultiPoint(Vec<DVec2>),
    LineString(Vec<DVec2>),
    MultiLineString(Vec<Vec<DVec2>>),
    /// Erster Ring = Außenring, weitere Ringe = Löcher
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
    Circle { center: DVec2, radius: f64 },
    /// Nicht unterstützte Art (z.B. GeometryCollection), Name zur Diagnose
    Unknown(String),
}

/// Achsenparalleles Begrenzungsrechteck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: DVec2,
    pub max: DVec2,
}

impl Extent {
    /// Extent über alle Punkte; `None` wenn keine Punkte vorhanden sind.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a DVec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut extent = Extent {
            min: first,
            max: first,
        };
        for p in iter {
            extent.min = extent.min.min(*p);
            extent.max = extent.max.max(*p);
        }
        Some(extent)
    }

    /// Mittelpunkt des Rechtecks.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}

impl Geometry {
    /// Geometrieart dieser Geometrie.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::Circle { .. } => GeometryKind::Circle,
            Geometry::Unknown(_) => GeometryKind::Unknown,
        }
    }

    /// Begrenzungsrechteck der Geometrie.
    pub fn extent(&self) -> Option<Extent> {
        match self {
            Geometry::Point(p) => Extent::from_points([p]),
            Geometry::MultiPoint(points) | Geometry::LineString(points) => {
                Extent::from_points(points)
            }
            Geometry::MultiLineString(lines) => Extent::from_points(lines.iter().flatten()),
            Geometry::Polygon(rings) => Extent::from_points(rings.iter().flatten()),
            Geometry::MultiPolygon(polygons) => {
                Extent::from_points(polygons.iter().flatten().flatten())
            }
            Geometry::Circle { center, radius } => {
                let r = DVec2::splat(radius.abs());
                Some(Extent {
                    min: *center - r,
                    max: *center + r,
                })
            }
            Geometry::Unknown(_) => None,
        }
    }

    /// Repräsentativer Punkt für Marker und Pan.
    ///
    /// - Polygon: Innenpunkt (liegt garantiert im Polygon, nicht der Schwerpunkt)
    /// - MultiPolygon: Innenpunkt des Teilpolygons, der dem Extent-Mittelpunkt am nächsten liegt
    /// - Point / Circle: eigene Koordinate bzw. Mittelpunkt
    /// - MultiPoint: Punkt, der dem Extent-Mittelpunkt am nächsten liegt
    /// - LineString: Punkt bei 50 % der Bogenlänge
    /// - MultiLineString: Punkt auf der Geometrie, der dem Extent-Mittelpunkt am nächsten liegt
    ///
    /// Gibt `None` für unbekannte Arten und leere Geometrien zurück.
    pub fn center(&self) -> Option<DVec2> {
        let center = match self {
            Geometry::Point(p) => Some(*p),
            Geometry::Circle { center, .. } => Some(*center),
            Geometry::LineString(points) => coordinate_at(points, 0.5),
            Geometry::MultiPoint(points) => {
                let target = self.extent()?.center();
                closest_of(points.iter().copied(), target)
            }
            Geometry::MultiLineString(lines) => {
                let target = self.extent()?.center();
                closest_of(
                    lines.iter().filter_map(|line| closest_on_line(line, target)),
                    target,
                )
            }
            Geometry::Polygon(rings) => interior_point(rings),
            Geometry::MultiPolygon(polygons) => {
                let target = self.extent()?.center();
                closest_of(
                    polygons.iter().filter_map(|rings| interior_point(rings)),
                    target,
                )
            }
            Geometry::Unknown(_) => None,
        };
        center.filter(|p| p.is_finite())
    }
}

/// Repräsentativer Punkt einer Geometrie (siehe [`Geometry::center`]).
pub fn center_of(geometry: &Geometry) -> Option<DVec2> {
    geometry.center()
}

/// Punkt bei `fraction` (0..=1) der Bogenlänge einer Linie.
pub fn coordinate_at(points: &[DVec2], fraction: f64) -> Option<DVec2> {
    let (first, last) = (*points.first()?, *points.last()?);
    if points.len() == 1 || fraction <= 0.0 {
        return Some(first);
    }
    if fraction >= 1.0 {
        return Some(last);
    }

    let total: f64 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
    let target = total * fraction;

    let mut walked = 0.0;
    for w in points.windows(2) {
        let seg_len = w[0].distance(w[1]);
        if seg_len > 0.0 && walked + seg_len >= target {
            let t = (target - walked) / seg_len;
            return Some(w[0].lerp(w[1], t));
        }
        walked += seg_len;
    }
    Some(first)
}

/// Kandidat mit dem kleinsten Abstand zu `target`; bei Gleichstand gewinnt der erste.
fn closest_of(candidates: impl IntoIterator<Item = DVec2>, target: DVec2) -> Option<DVec2> {
    let mut best: Option<(DVec2, f64)> = None;
    for candidate in candidates {
        let d = candidate.distance_squared(target);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((candidate, d)),
        }
    }
    best.map(|(p, _)| p)
}

/// Nächster Punkt auf einem Segment.
fn closest_on_segment(a: DVec2, b: DVec2, p: DVec2) -> DVec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Nächster Punkt auf einer Linie (Stützpunkte oder Segment-Innenpunkte).
fn closest_on_line(line: &[DVec2], target: DVec2) -> Option<DVec2> {
    match line {
        [] => None,
        [single] => Some(*single),
        _ => closest_of(
            line.windows(2)
                .map(|w| closest_on_segment(w[0], w[1], target)),
            target,
        ),
    }
}

/// Innenpunkt eines Polygons.
///
/// Schneidet eine horizontale Linie durch die vertikale Mitte des Extents mit
/// allen Ringen und nimmt die Mitte des breitesten Abschnitts, dessen
/// Mittelpunkt im Polygon liegt. Liegt kein Abschnitt innen, wird die
/// x-Mitte des Extents verwendet.
pub fn interior_point(rings: &[Ring]) -> Option<DVec2> {
    let exterior = rings.first()?;
    let extent = Extent::from_points(exterior)?;
    let center = extent.center();
    let y = center.y;

    let mut intersections = Vec::new();
    for ring in rings {
        let Some(&last) = ring.last() else {
            continue;
        };
        let mut prev = last;
        for &cur in ring {
            let crosses = (y <= prev.y && cur.y <= y) || (prev.y <= y && y <= cur.y);
            if crosses && cur.y != prev.y {
                let x = (y - prev.y) / (cur.y - prev.y) * (cur.x - prev.x) + prev.x;
                intersections.push(x);
            }
            prev = cur;
        }
    }
    intersections.sort_by(f64::total_cmp);

    let mut point_x = None;
    let mut max_len = f64::NEG_INFINITY;
    for pair in intersections.windows(2) {
        let len = (pair[1] - pair[0]).abs();
        if len > max_len {
            let x = (pair[0] + pair[1]) * 0.5;
            if rings_contain(rings, DVec2::new(x, y)) {
                point_x = Some(x);
                max_len = len;
            }
        }
    }

    Some(DVec2::new(point_x.unwrap_or(center.x), y))
}

/// Punkt liegt im Außenring und in keinem Loch.
fn rings_contain(rings: &[Ring], p: DVec2) -> bool {
    let Some((exterior, holes)) = rings.split_first() else {
        return false;
    };
    ring_contains(exterior, p) && !holes.iter().any(|hole| ring_contains(hole, p))
}

/// Winding-Number-Test für einen einzelnen Ring.
fn ring_contains(ring: &[DVec2], p: DVec2) -> bool {
    let Some(&last) = ring.last() else {
        return false;
    };
    let mut winding = 0i32;
    let mut prev = last;
    for &cur in ring {
        let side = (cur.x - prev.x) * (p.y - prev.y) - (p.x - prev.x) * (cur.y - prev.y);
        if prev.y <= p.y {
            if cur.y > p.y && side > 0.0 {
                winding += 1;
            }
        } else if cur.y <= p.y && side < 0.0 {
            winding -= 1;
        }
        prev = cur;
    }
    winding != 0
}
