//! Ad Registry: CRUD over user-submitted advertisements and categories.
//!
//! Every write is a synchronous read-modify-write of the whole collection
//! (single user, single tab). Validation failures surface as `RegistryError`
//! and leave the persisted collections untouched.

use crate::constants::default_categories;
use crate::model::{AdCategory, AdData};
use crate::storage::{KeyValueStore, StorageError};
use std::fmt;

pub const ADS_KEY: &str = "adopoly_custom_ads";
pub const CATEGORIES_KEY: &str = "adopoly_custom_categories";

/// Custom ad ids start above the board range so they never collide with the
/// square-index ids of default ads.
const CUSTOM_ID_FLOOR: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    MissingFields,
    EmptyCategoryName,
    DuplicateCategory(String),
    DefaultCategory(String),
    UnknownAd(u32),
    Storage(StorageError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::MissingFields => {
                write!(f, "Name, Link, and Image are required!")
            }
            RegistryError::EmptyCategoryName => write!(f, "Category name cannot be empty"),
            RegistryError::DuplicateCategory(_) => write!(f, "Category name already exists"),
            RegistryError::DefaultCategory(name) => {
                write!(f, "'{}' is a default category and cannot be deleted", name)
            }
            RegistryError::UnknownAd(id) => write!(f, "No advertisement with id {}", id),
            RegistryError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl From<StorageError> for RegistryError {
    fn from(err: StorageError) -> Self {
        RegistryError::Storage(err)
    }
}

/// Form payload for creating or editing an advertisement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub link: String,
    pub logo: String,
}

pub struct AdRegistry<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> AdRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Custom ads in registration order. Missing or malformed payloads read
    /// as an empty collection.
    pub fn ads(&self) -> Vec<AdData> {
        self.store
            .get(ADS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// All categories, defaults included. Defaults materialize until the
    /// category list has been customized at least once.
    pub fn categories(&self) -> Vec<AdCategory> {
        self.store
            .get(CATEGORIES_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_else(default_categories)
    }

    fn save_ads(&self, ads: &[AdData]) -> Result<(), RegistryError> {
        let raw = serde_json::to_string(ads).expect("ad list serializes");
        Ok(self.store.set(ADS_KEY, &raw)?)
    }

    fn save_categories(&self, categories: &[AdCategory]) -> Result<(), RegistryError> {
        let raw = serde_json::to_string(categories).expect("category list serializes");
        Ok(self.store.set(CATEGORIES_KEY, &raw)?)
    }

    fn validate(draft: &AdDraft) -> Result<(), RegistryError> {
        if draft.name.trim().is_empty() || draft.link.trim().is_empty() || draft.logo.is_empty() {
            return Err(RegistryError::MissingFields);
        }
        Ok(())
    }

    /// Color follows the selected category; an unknown selection falls back
    /// to the first category on file.
    fn category_of(&self, name: &str) -> AdCategory {
        let categories = self.categories();
        categories
            .iter()
            .find(|c| c.name == name)
            .or_else(|| categories.first())
            .cloned()
            .unwrap_or_else(|| default_categories().remove(0))
    }

    fn next_id(ads: &[AdData]) -> u32 {
        ads.iter()
            .map(|a| a.id)
            .max()
            .map_or(CUSTOM_ID_FLOOR, |max| max.max(CUSTOM_ID_FLOOR - 1) + 1)
    }

    pub fn create_ad(&self, draft: &AdDraft) -> Result<AdData, RegistryError> {
        Self::validate(draft)?;
        let mut ads = self.ads();
        let category = self.category_of(&draft.category);
        let ad = AdData {
            id: Self::next_id(&ads),
            name: draft.name.trim().to_string(),
            category: category.name,
            description: draft.description.clone(),
            logo: draft.logo.clone(),
            cta: "Visit Website".to_string(),
            link: draft.link.trim().to_string(),
            color: category.color,
            price: None,
            is_challenge: None,
            engagement_score: Some(0),
        };
        ads.push(ad.clone());
        self.save_ads(&ads)?;
        Ok(ad)
    }

    pub fn update_ad(&self, id: u32, draft: &AdDraft) -> Result<AdData, RegistryError> {
        Self::validate(draft)?;
        let mut ads = self.ads();
        let category = self.category_of(&draft.category);
        let ad = ads
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(RegistryError::UnknownAd(id))?;
        ad.name = draft.name.trim().to_string();
        ad.category = category.name;
        ad.description = draft.description.clone();
        ad.logo = draft.logo.clone();
        ad.link = draft.link.trim().to_string();
        ad.color = category.color;
        let updated = ad.clone();
        self.save_ads(&ads)?;
        Ok(updated)
    }

    pub fn delete_ad(&self, id: u32) -> Result<(), RegistryError> {
        let mut ads = self.ads();
        let before = ads.len();
        ads.retain(|a| a.id != id);
        if ads.len() == before {
            return Err(RegistryError::UnknownAd(id));
        }
        self.save_ads(&ads)
    }

    pub fn add_category(&self, name: &str, color: &str) -> Result<AdCategory, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyCategoryName);
        }
        let mut categories = self.categories();
        if categories
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name))
        {
            return Err(RegistryError::DuplicateCategory(name.to_string()));
        }
        let category = AdCategory {
            name: name.to_string(),
            color: color.to_string(),
            is_custom: true,
        };
        categories.push(category.clone());
        self.save_categories(&categories)?;
        Ok(category)
    }

    pub fn delete_category(&self, name: &str) -> Result<(), RegistryError> {
        let mut categories = self.categories();
        if let Some(cat) = categories.iter().find(|c| c.name == name) {
            if !cat.is_custom {
                return Err(RegistryError::DefaultCategory(name.to_string()));
            }
        }
        categories.retain(|c| c.name != name);
        self.save_categories(&categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn registry() -> AdRegistry<MemoryStore> {
        AdRegistry::new(MemoryStore::new())
    }

    fn draft(name: &str) -> AdDraft {
        AdDraft {
            name: name.to_string(),
            category: "Food".to_string(),
            description: "Fresh roast".to_string(),
            link: "https://pixel.coffee".to_string(),
            logo: "data:image/png;base64,abc".to_string(),
        }
    }

    #[test]
    fn empty_store_reads_as_empty_collections() {
        let reg = registry();
        assert!(reg.ads().is_empty());
        assert_eq!(reg.categories(), default_categories());
    }

    #[test]
    fn malformed_payload_reads_as_empty() {
        let reg = AdRegistry::new(MemoryStore::with_entry(ADS_KEY, "{not json"));
        assert!(reg.ads().is_empty());
        let reg = AdRegistry::new(MemoryStore::with_entry(CATEGORIES_KEY, "42"));
        assert_eq!(reg.categories(), default_categories());
    }

    #[test]
    fn create_requires_name_link_and_image() {
        let reg = registry();
        let mut missing = draft("Pixel Coffee");
        missing.logo = String::new();
        assert_eq!(reg.create_ad(&missing), Err(RegistryError::MissingFields));
        assert!(reg.ads().is_empty());

        let mut missing = draft("Pixel Coffee");
        missing.link = "  ".to_string();
        assert_eq!(reg.create_ad(&missing), Err(RegistryError::MissingFields));
        assert!(reg.ads().is_empty());
    }

    #[test]
    fn create_assigns_unique_ids_and_category_color() {
        let reg = registry();
        let first = reg.create_ad(&draft("Pixel Coffee")).unwrap();
        let second = reg.create_ad(&draft("Byte Bakery")).unwrap();
        assert_ne!(first.id, second.id);
        assert!(first.id >= 1000);
        assert_eq!(first.color, "#f59e0b"); // Food
        assert_eq!(first.cta, "Visit Website");
        assert_eq!(first.engagement_score, Some(0));
        assert_eq!(reg.ads().len(), 2);
    }

    #[test]
    fn unknown_category_falls_back_to_first() {
        let reg = registry();
        let mut d = draft("Pixel Coffee");
        d.category = "DoesNotExist".to_string();
        let ad = reg.create_ad(&d).unwrap();
        assert_eq!(ad.category, "Tech");
        assert_eq!(ad.color, "#3b82f6");
    }

    #[test]
    fn update_merges_fields_by_id() {
        let reg = registry();
        let ad = reg.create_ad(&draft("Pixel Coffee")).unwrap();
        let mut edit = draft("Pixel Coffee Roasters");
        edit.category = "Travel".to_string();
        let updated = reg.update_ad(ad.id, &edit).unwrap();
        assert_eq!(updated.id, ad.id);
        assert_eq!(updated.name, "Pixel Coffee Roasters");
        assert_eq!(updated.color, "#10b981"); // Travel
        assert_eq!(reg.ads().len(), 1);
        assert_eq!(reg.ads()[0], updated);
    }

    #[test]
    fn update_of_unknown_id_fails() {
        let reg = registry();
        assert_eq!(
            reg.update_ad(77, &draft("Ghost")),
            Err(RegistryError::UnknownAd(77))
        );
    }

    #[test]
    fn delete_removes_only_the_target() {
        let reg = registry();
        let a = reg.create_ad(&draft("A")).unwrap();
        let b = reg.create_ad(&draft("B")).unwrap();
        reg.delete_ad(a.id).unwrap();
        let remaining = reg.ads();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b.id);
        assert_eq!(reg.delete_ad(a.id), Err(RegistryError::UnknownAd(a.id)));
    }

    #[test]
    fn duplicate_category_names_are_rejected_case_insensitively() {
        let reg = registry();
        reg.add_category("Gaming", "#112233").unwrap();
        assert!(matches!(
            reg.add_category("gaming", "#445566"),
            Err(RegistryError::DuplicateCategory(_))
        ));
        assert!(matches!(
            reg.add_category("TECH", "#445566"),
            Err(RegistryError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn blank_category_name_is_rejected() {
        let reg = registry();
        assert_eq!(
            reg.add_category("   ", "#112233"),
            Err(RegistryError::EmptyCategoryName)
        );
    }

    #[test]
    fn default_categories_cannot_be_deleted() {
        let reg = registry();
        assert!(matches!(
            reg.delete_category("Tech"),
            Err(RegistryError::DefaultCategory(_))
        ));
        assert_eq!(reg.categories(), default_categories());
    }

    #[test]
    fn custom_categories_delete_cleanly() {
        let reg = registry();
        reg.add_category("Gaming", "#112233").unwrap();
        assert_eq!(reg.categories().len(), default_categories().len() + 1);
        reg.delete_category("Gaming").unwrap();
        assert_eq!(reg.categories(), default_categories());
    }

    #[test]
    fn ads_persist_across_registry_instances() {
        let store = MemoryStore::new();
        {
            let reg = AdRegistry::new(&store);
            reg.create_ad(&draft("Pixel Coffee")).unwrap();
        }
        let reg = AdRegistry::new(&store);
        assert_eq!(reg.ads().len(), 1);
    }
}
