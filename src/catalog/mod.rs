//! Static reference data for celestial bodies and probes.
//!
//! The catalog is read-only for a session. Bodies list the probes associated
//! with them by id, probes carry their own free-text target; the two relations
//! are maintained independently and never inferred from each other.

pub mod data;

use std::fmt;

use bevy::prelude::*;

/// Whether a body sits at the center of the scene or orbits it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
}

/// A star or planet with fixed orbital and visual attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub id: &'static str,
    /// English display name.
    pub name: &'static str,
    /// Localized (Chinese) display name.
    pub local_name: &'static str,
    pub kind: BodyKind,
    /// Relative orbital distance (abstract unit).
    pub distance: f32,
    /// Render radius of the body's sphere.
    pub size: f32,
    /// Render color as 0xRRGGBB.
    pub color: u32,
    pub description: &'static str,
    /// Associated probe ids, in display order. Unknown ids are allowed.
    pub probes: &'static [&'static str],
}

impl CelestialBody {
    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }

    /// Render color as a Bevy color.
    pub fn render_color(&self) -> Color {
        let [_, r, g, b] = self.color.to_be_bytes();
        Color::srgb_u8(r, g, b)
    }
}

/// Lifecycle status of a probe mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProbeStatus {
    Active,
    Inactive,
    Retired,
}

impl ProbeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeStatus::Active => "active",
            ProbeStatus::Inactive => "inactive",
            ProbeStatus::Retired => "retired",
        }
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mission category of a probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Orbiter,
    Lander,
    Rover,
    Flyby,
}

impl ProbeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeKind::Orbiter => "orbiter",
            ProbeKind::Lander => "lander",
            ProbeKind::Rover => "rover",
            ProbeKind::Flyby => "flyby",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A spacecraft record.
#[derive(Clone, Debug, PartialEq)]
pub struct Probe {
    pub id: &'static str,
    pub name: &'static str,
    /// Free-text target; not guaranteed to match any body id.
    pub target: &'static str,
    /// Launch date as recorded, not validated.
    pub launch_date: &'static str,
    pub status: ProbeStatus,
    pub kind: ProbeKind,
    pub description: &'static str,
}

impl Probe {
    /// Launch year, i.e. the launch date up to the first `-`.
    pub fn launch_year(&self) -> &'static str {
        self.launch_date
            .split('-')
            .next()
            .unwrap_or(self.launch_date)
    }
}

/// Either a body or a probe, tagged explicitly.
#[derive(Clone, Copy, Debug)]
pub enum CatalogEntry {
    Body(&'static CelestialBody),
    Probe(&'static Probe),
}

impl CatalogEntry {
    pub fn id(&self) -> &'static str {
        match self {
            CatalogEntry::Body(body) => body.id,
            CatalogEntry::Probe(probe) => probe.id,
        }
    }

    /// Name shown in headers and used as the enrichment subject.
    pub fn display_name(&self) -> &'static str {
        match self {
            CatalogEntry::Body(body) => body.local_name,
            CatalogEntry::Probe(probe) => probe.name,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CatalogEntry::Body(body) => body.description,
            CatalogEntry::Probe(probe) => probe.description,
        }
    }
}

impl PartialEq for CatalogEntry {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CatalogEntry::Body(a), CatalogEntry::Body(b)) => a.id == b.id,
            (CatalogEntry::Probe(a), CatalogEntry::Probe(b)) => a.id == b.id,
            _ => false,
        }
    }
}

impl Eq for CatalogEntry {}

/// Read-only catalog of bodies and probes for the session.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Catalog {
    bodies: &'static [CelestialBody],
    probes: &'static [Probe],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(data::BODIES, data::PROBES)
    }
}

impl Catalog {
    pub fn new(bodies: &'static [CelestialBody], probes: &'static [Probe]) -> Self {
        Self { bodies, probes }
    }

    pub fn bodies(&self) -> &'static [CelestialBody] {
        self.bodies
    }

    pub fn probes(&self) -> &'static [Probe] {
        self.probes
    }

    pub fn body(&self, id: &str) -> Option<&'static CelestialBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn probe(&self, id: &str) -> Option<&'static Probe> {
        self.probes.iter().find(|p| p.id == id)
    }

    /// The body reported when the central star is picked: the first star,
    /// else the first catalog body.
    pub fn star(&self) -> Option<&'static CelestialBody> {
        self.bodies
            .iter()
            .find(|b| b.is_star())
            .or_else(|| self.bodies.first())
    }

    /// Probes listed by `body` that exist in the catalog, in listed order.
    pub fn resolved_probes(&self, body: &CelestialBody) -> Vec<&'static Probe> {
        body.probes.iter().filter_map(|id| self.probe(id)).collect()
    }

    /// Every body paired with its resolved probes, in catalog order.
    pub fn body_tree(&self) -> Vec<(&'static CelestialBody, Vec<&'static Probe>)> {
        self.bodies
            .iter()
            .map(|body| (body, self.resolved_probes(body)))
            .collect()
    }
}
