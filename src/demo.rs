//! Built-in demo dataset for the dashboard prototype.
//!
//! Space and board metadata is fixed; only the online-user counts are drawn
//! from the supplied RNG, so `demo_catalog_with` plus a seeded RNG yields the
//! same catalog on every call.

use rand::Rng;

use crate::catalog::Catalog;
use crate::model::{Board, Section, Space};

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

const BOARD_ICONS: [&str; 8] = ["📝", "💡", "📈", "🗺️", "🎨", "🚀", "🧠", "🧭"];

const BOARD_NAMES: [&str; 8] = [
    "UX Deep Dive",
    "Q3 Planning",
    "User Research Synthesis",
    "Marketing Campaign",
    "Onboarding Flow",
    "Design System",
    "Brainstorming Session",
    "Project Roadmap",
];

const LAST_OPENED: [&str; 5] = [
    "Today",
    "Yesterday",
    "August 28, 2025",
    "August 27, 2025",
    "August 26, 2025",
];

const BOARD_OWNER: &str = "Paolo Trimarchi";

struct SpaceSpec {
    id: &'static str,
    name: &'static str,
    members: u32,
    has_overview: bool,
    pinned: bool,
    icon: &'static str,
    sections: &'static [(&'static str, usize)],
}

const SPACES: [SpaceSpec; 8] = [
    SpaceSpec {
        id: "miro-home",
        name: "Miro Home",
        members: 13,
        has_overview: false,
        pinned: true,
        icon: "🏠",
        sections: &[
            ("Shareouts", 2),
            ("Workshop", 3),
            ("Context", 4),
            ("Planning", 2),
        ],
    },
    SpaceSpec {
        id: "spaces-basics",
        name: "Spaces - Basics",
        members: 1,
        has_overview: true,
        pinned: true,
        icon: "🚀",
        sections: &[
            ("Context", 4),
            ("Problem & Prioritization", 2),
            ("Experiments", 3),
        ],
    },
    SpaceSpec {
        id: "core-experience",
        name: "Core Experience Stream",
        members: 42,
        has_overview: true,
        pinned: true,
        icon: "🌟",
        sections: &[("User Journey", 3), ("Pain Points", 5)],
    },
    SpaceSpec {
        id: "main-hub",
        name: "MiroWoW Main Hub",
        members: 120,
        has_overview: false,
        pinned: true,
        icon: "🏰",
        sections: &[("Announcements", 2), ("Team Resources", 6)],
    },
    SpaceSpec {
        id: "growth-core",
        name: "[Growth] Core",
        members: 25,
        has_overview: false,
        pinned: false,
        icon: "📈",
        sections: &[
            ("User Onboarding", 5),
            ("Activation Metrics", 3),
            ("Q3 Planning", 4),
        ],
    },
    SpaceSpec {
        id: "canvas-storage",
        name: "Canvas Storage",
        members: 8,
        has_overview: false,
        pinned: false,
        icon: "🔥",
        sections: &[("API Design", 4), ("Performance", 2)],
    },
    SpaceSpec {
        id: "design-system-guild",
        name: "Design System Guild",
        members: 35,
        has_overview: true,
        pinned: false,
        icon: "🎨",
        sections: &[("Component Library", 8), ("Contribution Guidelines", 2)],
    },
    SpaceSpec {
        id: "marketing-campaigns",
        name: "Marketing Campaigns",
        members: 18,
        has_overview: false,
        pinned: false,
        icon: "📣",
        sections: &[("Q3 Campaigns", 4), ("Social Media Assets", 6)],
    },
];

/// Builds the demo catalog with the thread-local RNG.
#[must_use]
pub fn demo_catalog() -> Catalog {
    demo_catalog_with(&mut rand::rng())
}

/// Builds the demo catalog, drawing online-user counts from `rng`.
pub fn demo_catalog_with(rng: &mut impl Rng) -> Catalog {
    let spaces = SPACES.iter().map(|spec| build_space(spec, rng)).collect();
    Catalog::from_parts(spaces, team_boards())
}

fn build_space(spec: &SpaceSpec, rng: &mut impl Rng) -> Space {
    // One counter per space, running across its sections, so board ids and
    // the name/icon/date cycles continue from one section into the next.
    let mut counter = 0;
    let mut sections = Vec::with_capacity(spec.sections.len());
    for &(name, count) in spec.sections {
        let mut boards = Vec::with_capacity(count);
        for _ in 0..count {
            boards.push(build_board(spec.id, counter, rng));
            counter += 1;
        }
        sections.push(Section {
            name: name.to_owned(),
            boards,
        });
    }
    Space {
        id: spec.id.to_owned(),
        name: spec.name.to_owned(),
        members: spec.members,
        has_overview: spec.has_overview,
        pinned: spec.pinned,
        icon: spec.icon.to_owned(),
        sections,
    }
}

fn build_board(space_id: &str, counter: usize, rng: &mut impl Rng) -> Board {
    Board {
        id: format!("board-{space_id}-{counter}"),
        name: format!("{} #{}", BOARD_NAMES[counter % BOARD_NAMES.len()], counter + 1),
        icon: BOARD_ICONS[counter % BOARD_ICONS.len()].to_owned(),
        owner: BOARD_OWNER.to_owned(),
        last_opened: LAST_OPENED[counter % LAST_OPENED.len()].to_owned(),
        online_users: rng.random_range(0..5),
        space_id: Some(space_id.to_owned()),
        classification: "Internal".to_owned(),
    }
}

fn team_boards() -> Vec<Board> {
    vec![
        Board {
            id: "team-board-1".to_owned(),
            name: "Quarterly Business Review".to_owned(),
            icon: "📊".to_owned(),
            owner: BOARD_OWNER.to_owned(),
            last_opened: "Today".to_owned(),
            online_users: 3,
            space_id: None,
            classification: "Confidential".to_owned(),
        },
        Board {
            id: "team-board-2".to_owned(),
            name: "All-Hands Meeting Notes".to_owned(),
            icon: "🗣️".to_owned(),
            owner: "Jane Doe".to_owned(),
            last_opened: "Yesterday".to_owned(),
            online_users: 0,
            space_id: None,
            classification: "Internal".to_owned(),
        },
    ]
}
