//=========================================================================
// Scene Assets
//=========================================================================
//
// Named handles for the sounds and images the scene and its
// collaborators reference. Handles only carry the asset path; loading
// and decoding belong to the host.
//
//=========================================================================

//=== Handles =============================================================

/// Reference to an image asset by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(&'static str);

impl ImageHandle {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &'static str {
        self.0
    }
}

/// Reference to a sound asset by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(&'static str);

impl SoundHandle {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &'static str {
        self.0
    }
}

//=== SceneAssets =========================================================

/// Every asset the play scene owns a handle to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneAssets {
    //--- Sounds -----------------------------------------------------------
    pub no_ammo_sound: SoundHandle,
    pub crate_pickup_sound: SoundHandle,

    //--- HUD & Pickups ----------------------------------------------------
    pub health: ImageHandle,
    pub coins: ImageHandle,
    pub crate_box: ImageHandle,
    pub gun_frame: ImageHandle,
    pub small_ammo: ImageHandle,
    pub medium_ammo: ImageHandle,
    pub large_ammo: ImageHandle,
    pub shells_ammo: ImageHandle,

    //--- Skins ------------------------------------------------------------
    pub ranged_enemy: ImageHandle,
    pub shop_keeper: ImageHandle,
    pub dummy: ImageHandle,
}

impl SceneAssets {
    pub fn images(&self) -> [ImageHandle; 11] {
        [
            self.health,
            self.coins,
            self.crate_box,
            self.gun_frame,
            self.small_ammo,
            self.medium_ammo,
            self.large_ammo,
            self.shells_ammo,
            self.ranged_enemy,
            self.shop_keeper,
            self.dummy,
        ]
    }

    pub fn sounds(&self) -> [SoundHandle; 2] {
        [self.no_ammo_sound, self.crate_pickup_sound]
    }
}

impl Default for SceneAssets {
    fn default() -> Self {
        Self {
            no_ammo_sound: SoundHandle::new("sounds/noammo.mp3"),
            crate_pickup_sound: SoundHandle::new("sounds/pickupCoin.wav"),

            health: ImageHandle::new("images/health.png"),
            coins: ImageHandle::new("images/coin.png"),
            crate_box: ImageHandle::new("images/crate.png"),
            gun_frame: ImageHandle::new("images/guns/frame.png"),
            small_ammo: ImageHandle::new("images/smallammo.png"),
            medium_ammo: ImageHandle::new("images/mediumammo.png"),
            large_ammo: ImageHandle::new("images/largeammo.png"),
            shells_ammo: ImageHandle::new("images/shellsammo.png"),

            ranged_enemy: ImageHandle::new("images/skins/rangedEnemy.png"),
            shop_keeper: ImageHandle::new("images/skins/shopGuy.png"),
            dummy: ImageHandle::new("images/skins/dummy.png"),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_asset_paths_are_distinct() {
        let assets = SceneAssets::default();
        let images: HashSet<_> = assets.images().iter().map(|h| h.path()).collect();
        let sounds: HashSet<_> = assets.sounds().iter().map(|h| h.path()).collect();

        assert_eq!(images.len(), 11);
        assert_eq!(sounds.len(), 2);
    }

    #[test]
    fn handles_compare_by_path() {
        assert_eq!(ImageHandle::new("a.png"), ImageHandle::new("a.png"));
        assert_ne!(SoundHandle::new("a.wav"), SoundHandle::new("b.wav"));
    }
}
