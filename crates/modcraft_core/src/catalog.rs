//! Fixed content of the generator: the stage timeline, the placeholder
//! records it reveals, the selectable Forge versions and the sidebar sections.
use std::fmt;
use std::time::Duration;

use crate::GenerationStage;

/// Delay of every texture/script step; one placeholder record is revealed
/// when it elapses.
pub const ITEM_STAGE_DELAY: Duration = Duration::from_millis(1500);
/// Delay of the closing `Done` step before progress reaches 100%.
pub const FINAL_STAGE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageStep {
    pub stage: GenerationStage,
    pub delay: Duration,
}

pub const STAGE_STEPS: [StageStep; 5] = [
    StageStep {
        stage: GenerationStage::TexturesBlocks,
        delay: ITEM_STAGE_DELAY,
    },
    StageStep {
        stage: GenerationStage::TexturesItems,
        delay: ITEM_STAGE_DELAY,
    },
    StageStep {
        stage: GenerationStage::TexturesEntities,
        delay: ITEM_STAGE_DELAY,
    },
    StageStep {
        stage: GenerationStage::Scripts,
        delay: ITEM_STAGE_DELAY,
    },
    StageStep {
        stage: GenerationStage::Done,
        delay: FINAL_STAGE_DELAY,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Block,
    Item,
    Entity,
}

impl ItemKind {
    /// Lower-case tag used in the exported artifact.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Block => "block",
            ItemKind::Item => "item",
            ItemKind::Entity => "entity",
        }
    }

    /// Badge text shown next to a generated record.
    pub fn badge(self) -> &'static str {
        match self {
            ItemKind::Block => "Block",
            ItemKind::Item => "Item",
            ItemKind::Entity => "Entity",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModItem {
    pub kind: ItemKind,
    pub name: &'static str,
    pub description: &'static str,
}

/// Returned verbatim, in this order, by every run regardless of the prompt.
pub const PLACEHOLDER_ITEMS: [ModItem; 4] = [
    ModItem {
        kind: ItemKind::Block,
        name: "Magic Stone",
        description: "A block with unique properties",
    },
    ModItem {
        kind: ItemKind::Item,
        name: "Potion of Strength",
        description: "Increases damage by 50%",
    },
    ModItem {
        kind: ItemKind::Entity,
        name: "Fire Golem",
        description: "Hostile mob",
    },
    ModItem {
        kind: ItemKind::Block,
        name: "Dimension Portal",
        description: "Teleports you to a new world",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForgeVersion {
    pub id: &'static str,
    pub available: bool,
}

impl ForgeVersion {
    pub fn label(&self) -> String {
        if self.available {
            format!("Forge {}", self.id)
        } else {
            format!("Forge {} (coming soon)", self.id)
        }
    }
}

pub const DEFAULT_FORGE_VERSION: &str = "1.20.1";

pub const FORGE_VERSIONS: [ForgeVersion; 3] = [
    ForgeVersion {
        id: "1.20.1",
        available: true,
    },
    ForgeVersion {
        id: "1.19.4",
        available: false,
    },
    ForgeVersion {
        id: "1.18.2",
        available: false,
    },
];

pub fn find_version(id: &str) -> Option<&'static ForgeVersion> {
    FORGE_VERSIONS.iter().find(|version| version.id == id.trim())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Generator,
    Downloads,
    Versions,
    Updates,
    Profile,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Generator,
        Section::Downloads,
        Section::Versions,
        Section::Updates,
        Section::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Generator => "Generator",
            Section::Downloads => "Downloads",
            Section::Versions => "Versions",
            Section::Updates => "Updates",
            Section::Profile => "Profile",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_default_version_is_available() {
        let available: Vec<_> = FORGE_VERSIONS
            .iter()
            .filter(|v| v.available)
            .map(|v| v.id)
            .collect();
        assert_eq!(available, vec![DEFAULT_FORGE_VERSION]);
        assert_eq!(
            find_version("1.19.4").map(ForgeVersion::label).as_deref(),
            Some("Forge 1.19.4 (coming soon)")
        );
        assert!(find_version("1.12.2").is_none());
    }

    #[test]
    fn timeline_ends_with_done() {
        assert_eq!(STAGE_STEPS.len(), PLACEHOLDER_ITEMS.len() + 1);
        assert_eq!(STAGE_STEPS[4].stage, GenerationStage::Done);
        assert_eq!(STAGE_STEPS[4].delay, FINAL_STAGE_DELAY);
    }
}
