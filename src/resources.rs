//! Shared resources - catalog data and the two sibling display views.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy_egui::egui;

use crate::catalog::{CatalogEntry, Field};
use crate::cells::{RenderCell, RowArity};
use crate::goods::{GoodId, GoodMap};

/// The normalized catalog, in table order. Built once during loading,
/// never mutated while browsing.
#[derive(Resource, Default)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

/// Index of the currently selected entry, if any.
#[derive(Resource, Default)]
pub struct SelectedLayout(pub Option<usize>);

/// Bevy image handles for every layout picture, keyed by image ref.
/// Requested up front so selection never waits on disk.
#[derive(Resource, Default)]
pub struct LayoutImages(pub HashMap<String, Handle<Image>>);

/// egui texture ids for the good icons, registered once after load.
#[derive(Resource, Default)]
pub struct IconTextures(HashMap<GoodId, egui::TextureId>);

impl IconTextures {
    pub fn insert(&mut self, good: GoodId, id: egui::TextureId) {
        self.0.insert(good, id);
    }

    pub fn id(&self, good: &GoodId) -> Option<egui::TextureId> {
        self.0.get(good).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The image view. Written only by the selection dispatcher.
#[derive(Resource, Default)]
pub struct LayoutDisplay {
    pub image_ref: Option<String>,
    /// Bumped on every dispatch, so a reselection of the same record is
    /// distinguishable from no interaction at all.
    pub revision: u64,
}

impl LayoutDisplay {
    pub fn update_image(&mut self, image_ref: &str) {
        self.image_ref = Some(image_ref.to_string());
        self.revision += 1;
    }
}

/// Snapshot of one record's five normalized fields plus their
/// precomputed cell runs.
#[derive(Clone, Debug)]
pub struct InfoContents {
    pub cost: Field<GoodMap>,
    pub size: Field<String>,
    pub tiles: Field<f64>,
    pub space_efficiency: Field<f64>,
    pub production: Field<GoodMap>,
    pub cost_cells: Vec<RenderCell>,
    pub production_cells: Vec<RenderCell>,
    pub arity: RowArity,
}

/// The info view. Written only by the selection dispatcher, always in
/// the same frame as (and after) the image view.
#[derive(Resource, Default)]
pub struct InfoPanel {
    pub current: Option<InfoContents>,
    /// Counts dispatches, like `LayoutDisplay::revision`.
    pub revision: u64,
}

impl InfoPanel {
    /// Replace the panel contents with one entry's normalized fields.
    pub fn update_info(&mut self, entry: &CatalogEntry) {
        self.current = Some(InfoContents {
            cost: entry.record.cost.clone(),
            size: entry.record.size.clone(),
            tiles: entry.record.tiles.clone(),
            space_efficiency: entry.record.space_efficiency.clone(),
            production: entry.record.production.clone(),
            cost_cells: entry.cost_cells.clone(),
            production_cells: entry.production_cells.clone(),
            arity: entry.arity,
        });
        self.revision += 1;
    }
}

/// Which panels are open.
#[derive(Resource)]
pub struct UiState {
    pub info_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { info_open: true }
    }
}

/// Human-readable reason the catalog failed to load, for the failure
/// screen.
#[derive(Resource, Default)]
pub struct LoadError(pub Option<String>);
