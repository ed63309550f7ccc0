//! A dealt table session.
//!
//! `Table::deal` is the startup barrier: it builds the catalog, deals the
//! player and bot hands from one shared `ChosenSet`, and loads artwork.
//! Only a fully dealt `Table` can receive pointer events or be rendered.
//!
//! ## Usage
//!
//! ```
//! use card_table::cards::DirectoryAssetLoader;
//! use card_table::core::TableConfig;
//! use card_table::pick::PointerState;
//! use card_table::reveal::HoverTransition;
//! use card_table::table::Table;
//!
//! let config = TableConfig::default().with_seed(42);
//! let mut loader = DirectoryAssetLoader::new("/no/assets");
//! let mut table = Table::deal(config, &mut loader).unwrap();
//!
//! // Hover over the middle player card
//! let pointer = table.pointer_over_player_slot(3).unwrap();
//! let transition = table.on_pointer_move(pointer);
//! assert!(matches!(transition, HoverTransition::Entered { slot: 3, .. }));
//!
//! // Move to an empty corner of the screen
//! table.on_pointer_move(PointerState::new(-0.95, -0.95));
//! assert!(table.player().lifted_slots().is_empty());
//! ```

use super::scene::{RenderSurface, SceneNode};
use crate::cards::{back_path, AssetLoader, CardCatalog, Face};
use crate::core::{Result, TableConfig, TableRng, TableRngState};
use crate::deal::{ChosenSet, Hand, HandBuilder, Lane, RandomSampler, Side};
use crate::pick::{Camera, HitTester, PointerState, Ray};
use crate::reveal::{HoverState, HoverTracker, HoverTransition};

/// Dealt table: catalog, both hands, camera, and hover state.
#[derive(Clone, Debug)]
pub struct Table {
    config: TableConfig,
    catalog: CardCatalog,
    player: Hand,
    bot: Hand,
    back: Face,
    camera: Camera,
    hit_tester: HitTester,
    hover: HoverTracker,
    dealt_from: TableRngState,
}

impl Table {
    /// Deal a new table.
    ///
    /// Uses `config.seed` when set, otherwise a seed from the operating
    /// system (logged, and recoverable through [`Table::dealt_from`]).
    pub fn deal<L>(config: TableConfig, loader: &mut L) -> Result<Self>
    where
        L: AssetLoader + ?Sized,
    {
        let rng = match config.seed {
            Some(seed) => TableRng::new(seed),
            None => TableRng::from_entropy(),
        };
        Self::deal_with_rng(config, rng, loader)
    }

    /// Deal a table from a previously captured RNG state.
    pub fn replay<L>(config: TableConfig, state: &TableRngState, loader: &mut L) -> Result<Self>
    where
        L: AssetLoader + ?Sized,
    {
        Self::deal_with_rng(config, TableRng::from_state(state), loader)
    }

    fn deal_with_rng<L>(config: TableConfig, rng: TableRng, loader: &mut L) -> Result<Self>
    where
        L: AssetLoader + ?Sized,
    {
        config.validate()?;

        let dealt_from = rng.state();
        let catalog = CardCatalog::build();
        let mut sampler = RandomSampler::new(rng);
        let mut chosen = ChosenSet::new();
        let builder = HandBuilder::from_config(&config);

        let player_lane = Lane::new(Side::Player, config.player_lane);
        let bot_lane = Lane::new(Side::Bot, config.bot_lane);
        let player = builder.deal_hand(&catalog, &mut sampler, &mut chosen, player_lane, loader)?;
        let bot = builder.deal_hand(&catalog, &mut sampler, &mut chosen, bot_lane, loader)?;

        let back = loader.load_or_placeholder(&back_path(&config.asset_root, &config.back_face));

        tracing::info!(
            seed = dealt_from.seed,
            player = ?player.indices(),
            bot = ?bot.indices(),
            "table dealt"
        );

        Ok(Self {
            camera: Camera::new(&config.camera),
            hit_tester: HitTester::new(config.card),
            config,
            catalog,
            player,
            bot,
            back,
            hover: HoverTracker::new(),
            dealt_from,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn player(&self) -> &Hand {
        &self.player
    }

    #[must_use]
    pub fn bot(&self) -> &Hand {
        &self.bot
    }

    /// Shared back face.
    #[must_use]
    pub fn back(&self) -> Face {
        self.back
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover.state()
    }

    /// RNG state the deal started from; pass to [`Table::replay`].
    #[must_use]
    pub fn dealt_from(&self) -> &TableRngState {
        &self.dealt_from
    }

    /// Handle a pointer move in normalized coordinates.
    pub fn on_pointer_move(&mut self, pointer: PointerState) -> HoverTransition {
        let ray = self.camera.project_pointer(pointer);
        self.on_pointer_ray(&ray)
    }

    /// Handle a pointer move, projecting it through `surface`.
    pub fn on_surface_pointer_move<S>(
        &mut self,
        surface: &S,
        pointer: PointerState,
    ) -> HoverTransition
    where
        S: RenderSurface + ?Sized,
    {
        let ray = surface.project_pointer(pointer, &self.camera);
        self.on_pointer_ray(&ray)
    }

    fn on_pointer_ray(&mut self, ray: &Ray) -> HoverTransition {
        let hit = self.hit_tester.pick_in_view(ray, &self.camera, &self.player);
        self.hover.apply(hit, &mut self.player, &mut self.bot)
    }

    /// Handle a pointer move in viewport pixels.
    pub fn on_viewport_pointer_move(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<HoverTransition> {
        let pointer = PointerState::from_viewport(x, y, width, height)?;
        Ok(self.on_pointer_move(pointer))
    }

    /// Match the camera to a resized viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.camera.set_aspect(width / height);
        }
    }

    /// Pointer position over the centre of a player card.
    #[must_use]
    pub fn pointer_over_player_slot(&self, slot: usize) -> Option<PointerState> {
        self.player
            .get(slot)
            .and_then(|entry| self.camera.project_point(entry.position()))
    }

    /// Snapshot of every card for rendering, player hand first.
    #[must_use]
    pub fn scene(&self) -> Vec<SceneNode> {
        let rotation = self.config.card.rotation_y();
        [&self.player, &self.bot]
            .into_iter()
            .flat_map(|hand| {
                hand.iter()
                    .map(move |entry| SceneNode::from_entry(hand.side(), entry, rotation, self.back))
            })
            .collect()
    }

    /// Draw one frame.
    pub fn render<S>(&self, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        surface.render(&self.scene(), &self.camera);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{TextureId, DECK_SIZE};
    use crate::core::TableError;
    use crate::pick::Vec3;

    struct NoAssets;

    impl AssetLoader for NoAssets {
        fn load(&mut self, path: &str) -> Result<TextureId> {
            Err(TableError::AssetResolution {
                path: path.to_string(),
                reason: "offline".into(),
            })
        }
    }

    fn seeded(seed: u64) -> Table {
        Table::deal(TableConfig::default().with_seed(seed), &mut NoAssets).unwrap()
    }

    #[test]
    fn test_deal_sizes_and_disjointness() {
        let table = seeded(1);
        assert_eq!(table.player().len(), 7);
        assert_eq!(table.bot().len(), 7);
        assert_eq!(table.catalog().len(), DECK_SIZE);

        let player = table.player().indices();
        assert!(table.bot().indices().iter().all(|i| !player.contains(i)));
    }

    #[test]
    fn test_missing_assets_become_placeholders() {
        let table = seeded(2);
        assert!(table.back().is_placeholder());
        assert!(table.player().iter().all(|e| e.front.is_placeholder()));
    }

    #[test]
    fn test_same_seed_same_deal() {
        assert_eq!(seeded(3).player().indices(), seeded(3).player().indices());
        assert_eq!(seeded(3).bot().indices(), seeded(3).bot().indices());
    }

    #[test]
    fn test_replay_reproduces_unseeded_deal() {
        let table = Table::deal(TableConfig::default(), &mut NoAssets).unwrap();
        let again = Table::replay(TableConfig::default(), table.dealt_from(), &mut NoAssets).unwrap();
        assert_eq!(table.player().indices(), again.player().indices());
        assert_eq!(table.bot().indices(), again.bot().indices());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TableConfig::default().with_hand_size(0);
        assert!(matches!(
            Table::deal(config, &mut NoAssets),
            Err(TableError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_oversized_hands_fail() {
        let config = TableConfig::default().with_hand_size(27).with_seed(1);
        assert!(matches!(
            Table::deal(config, &mut NoAssets),
            Err(TableError::InsufficientRange {
                requested: 27,
                remaining: 25
            })
        ));
    }

    #[test]
    fn test_full_deck_split() {
        let config = TableConfig::default().with_hand_size(26).with_seed(1);
        let table = Table::deal(config, &mut NoAssets).unwrap();
        let mut all: Vec<_> = table.player().indices();
        all.extend(table.bot().indices());
        all.sort();
        all.dedup();
        assert_eq!(all.len(), DECK_SIZE);
    }

    #[test]
    fn test_scene_names_and_order() {
        let table = seeded(4);
        let scene = table.scene();
        assert_eq!(scene.len(), 14);
        assert!(scene[..7].iter().all(|n| n.side == Side::Player));
        assert!(scene[7..].iter().all(|n| n.side == Side::Bot));
        assert!(scene[0].name.starts_with("player-0-"));
        assert!(scene[7].name.starts_with("bot-0-"));
    }

    #[test]
    fn test_viewport_pointer_move() {
        let mut table = seeded(5);
        let transition = table.on_viewport_pointer_move(0.0, 0.0, 800.0, 600.0).unwrap();
        assert_eq!(transition, HoverTransition::Idle);
        assert!(table.on_viewport_pointer_move(0.0, 0.0, 0.0, 600.0).is_err());
    }

    #[test]
    fn test_still_pointer_on_lower_edge_stays_hovered() {
        let mut table = seeded(1);
        let entry = table.player().get(3).unwrap();
        let lower_edge = Vec3::new(entry.base.x, -2.0, entry.base.z);
        let pointer = table.camera().project_point(lower_edge).unwrap();

        assert!(matches!(
            table.on_pointer_move(pointer),
            HoverTransition::Entered { slot: 3, .. }
        ));
        for _ in 0..3 {
            assert_eq!(table.on_pointer_move(pointer), HoverTransition::Unchanged);
            assert_eq!(table.player().lifted_slots(), vec![3]);
        }
    }

    /// Surface that maps every pointer to the centre of the screen.
    struct CentredSurface;

    impl RenderSurface for CentredSurface {
        fn render(&mut self, _nodes: &[SceneNode], _camera: &Camera) {}

        fn project_pointer(&self, _pointer: PointerState, camera: &Camera) -> Ray {
            camera.project_pointer(PointerState::new(0.0, 0.0))
        }
    }

    struct PlainSurface;

    impl RenderSurface for PlainSurface {
        fn render(&mut self, _nodes: &[SceneNode], _camera: &Camera) {}
    }

    #[test]
    fn test_surface_projection_drives_hit_test() {
        let mut table = seeded(8);
        let pointer = table.pointer_over_player_slot(0).unwrap();

        // Default projection matches the camera path
        assert!(matches!(
            table.on_surface_pointer_move(&PlainSurface, pointer),
            HoverTransition::Entered { slot: 0, .. }
        ));

        // Screen centre sits above the player row, so the override misses
        assert_eq!(
            table.on_surface_pointer_move(&CentredSurface, pointer),
            HoverTransition::Left
        );
        assert!(table.player().lifted_slots().is_empty());
    }

    #[test]
    fn test_resize_keeps_slots_pickable() {
        let mut table = seeded(6);
        table.resize(600.0, 800.0);
        let pointer = table.pointer_over_player_slot(0).unwrap();
        assert!(matches!(
            table.on_pointer_move(pointer),
            HoverTransition::Entered { slot: 0, .. }
        ));
    }
}
