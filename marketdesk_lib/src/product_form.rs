//! Product create/edit form state.
//!
//! Brand, color, and material each allow either picks from the master list
//! or an "Other" custom value, never both: selecting Other clears the list
//! picks, and picking from the list clears and deactivates Other. Colors
//! cap at 2, materials at 3, images at 20; a violating selection is
//! rejected with the exact message the dashboard shows and leaves the
//! selection untouched. All of this is client-side only; the backend is not
//! re-consulted about it.

use marketdesk_api::{ImageFile, ProductPayload};

pub const MAX_COLORS: usize = 2;
pub const MAX_MATERIALS: usize = 3;
pub const MAX_IMAGES: usize = 20;

/// A single-choice field with an "Other" escape hatch (brand).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SinglePick {
    selected: Option<i64>,
    other: bool,
    custom: String,
}

impl SinglePick {
    /// Picks a list value, clearing any active custom value.
    pub fn pick(&mut self, id: i64) {
        self.selected = Some(id);
        self.other = false;
        self.custom.clear();
    }

    /// Activates "Other", clearing the list selection.
    pub fn select_other(&mut self) {
        self.selected = None;
        self.other = true;
    }

    pub fn set_custom(&mut self, text: &str) {
        self.custom = text.to_string();
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn other_active(&self) -> bool {
        self.other
    }

    pub fn custom(&self) -> &str {
        &self.custom
    }
}

/// A multi-choice field with a cap and an "Other" escape hatch (colors,
/// materials).
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPick {
    picked: Vec<i64>,
    other: bool,
    custom: String,
    max: usize,
    noun: &'static str,
}

impl MultiPick {
    fn new(max: usize, noun: &'static str) -> Self {
        Self {
            picked: Vec::new(),
            other: false,
            custom: String::new(),
            max,
            noun,
        }
    }

    /// Toggles a list value. Adding past the cap is rejected and the
    /// selection set stays as it was.
    pub fn toggle(&mut self, id: i64) -> Result<(), String> {
        if let Some(pos) = self.picked.iter().position(|p| *p == id) {
            self.picked.remove(pos);
            return Ok(());
        }
        if self.picked.len() >= self.max {
            return Err(format!("Maximum {} {} allowed", self.max, self.noun));
        }
        // A list pick deactivates Other.
        self.other = false;
        self.custom.clear();
        self.picked.push(id);
        Ok(())
    }

    /// Activates "Other", clearing all list picks.
    pub fn select_other(&mut self) {
        self.picked.clear();
        self.other = true;
    }

    pub fn set_custom(&mut self, text: &str) {
        self.custom = text.to_string();
    }

    pub fn picked(&self) -> &[i64] {
        &self.picked
    }

    pub fn other_active(&self) -> bool {
        self.other
    }

    pub fn custom(&self) -> &str {
        &self.custom
    }
}

/// Local state of the add/edit product form. Mirrors the entity fields;
/// submission goes through [`ProductForm::build_payload`].
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub category_id: Option<i64>,
    pub sub_category_id: Option<i64>,
    /// Third category level shown as "sub-sub-category" in the UI.
    pub sub_sub_category_id: Option<i64>,
    pub brand: SinglePick,
    pub colors: MultiPick,
    pub materials: MultiPick,
    pub size_id: Option<i64>,
    pub condition_id: Option<i64>,
    pub is_negotiable: bool,
    /// Image URLs already on the product (edit flow).
    pub existing_images: Vec<String>,
    /// Newly attached files.
    pub new_images: Vec<ImageFile>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: None,
            category_id: None,
            sub_category_id: None,
            sub_sub_category_id: None,
            brand: SinglePick::default(),
            colors: MultiPick::new(MAX_COLORS, "colors"),
            materials: MultiPick::new(MAX_MATERIALS, "materials"),
            size_id: None,
            condition_id: None,
            is_negotiable: false,
            existing_images: Vec::new(),
            new_images: Vec::new(),
        }
    }

    fn image_count(&self) -> usize {
        self.existing_images.len() + self.new_images.len()
    }

    /// Attaches a new image, enforcing the overall cap across kept and new
    /// images.
    pub fn add_image(&mut self, image: ImageFile) -> Result<(), String> {
        if self.image_count() >= MAX_IMAGES {
            return Err(format!("Maximum {} images allowed", MAX_IMAGES));
        }
        self.new_images.push(image);
        Ok(())
    }

    pub fn remove_new_image(&mut self, index: usize) {
        if index < self.new_images.len() {
            self.new_images.remove(index);
        }
    }

    /// Client-side checks run before any network call.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.price.is_none() {
            return Err("Price is required".to_string());
        }
        if self.brand.other_active() && self.brand.custom().trim().is_empty() {
            return Err("Please enter a custom brand name".to_string());
        }
        if self.colors.other_active() && self.colors.custom().trim().is_empty() {
            return Err("Please enter a custom color".to_string());
        }
        if self.materials.other_active() && self.materials.custom().trim().is_empty() {
            return Err("Please enter a custom material".to_string());
        }
        Ok(())
    }

    /// Validates and assembles the multipart payload. Empty optionals are
    /// left out; booleans are always included.
    pub fn build_payload(&self, user_id: Option<i64>) -> Result<ProductPayload, String> {
        self.validate()?;

        Ok(ProductPayload {
            user_id,
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            category_id: self.category_id,
            // The backend schema has no third-level column; the deepest
            // selected level goes out under `sub_category_id`, as the live
            // dashboard has always sent it.
            // TODO: ask the backend owners whether sub_category_id is meant
            // to carry the third level or this is a latent schema bug.
            sub_category_id: self.sub_sub_category_id.or(self.sub_category_id),
            brand_id: self.brand.selected(),
            custom_brand: self.brand.custom().to_string(),
            size_id: self.size_id,
            condition_id: self.condition_id,
            color_ids: self.colors.picked().to_vec(),
            custom_color: self.colors.custom().to_string(),
            material_ids: self.materials.picked().to_vec(),
            custom_material: self.materials.custom().to_string(),
            is_negotiable: Some(self.is_negotiable),
            status: None,
            extra: Vec::new(),
            existing_images: self.existing_images.clone(),
            images: self.new_images.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        let mut form = ProductForm::new();
        form.title = "Silk scarf".to_string();
        form.price = Some(120.0);
        form
    }

    #[test]
    fn third_color_is_rejected_and_selection_unchanged() {
        let mut form = ProductForm::new();
        form.colors.toggle(1).unwrap();
        form.colors.toggle(2).unwrap();

        let err = form.colors.toggle(3).unwrap_err();
        assert_eq!(err, "Maximum 2 colors allowed");
        assert_eq!(form.colors.picked(), &[1, 2]);
    }

    #[test]
    fn fourth_material_is_rejected() {
        let mut form = ProductForm::new();
        for id in [1, 2, 3] {
            form.materials.toggle(id).unwrap();
        }
        assert_eq!(
            form.materials.toggle(4).unwrap_err(),
            "Maximum 3 materials allowed"
        );
    }

    #[test]
    fn toggling_a_picked_color_removes_it() {
        let mut form = ProductForm::new();
        form.colors.toggle(1).unwrap();
        form.colors.toggle(1).unwrap();
        assert!(form.colors.picked().is_empty());
    }

    #[test]
    fn other_clears_list_picks_and_vice_versa() {
        let mut form = ProductForm::new();
        form.colors.toggle(1).unwrap();
        form.colors.select_other();
        assert!(form.colors.picked().is_empty());
        assert!(form.colors.other_active());

        form.colors.set_custom("teal");
        form.colors.toggle(2).unwrap();
        assert!(!form.colors.other_active());
        assert_eq!(form.colors.custom(), "");
        assert_eq!(form.colors.picked(), &[2]);
    }

    #[test]
    fn brand_pick_disables_other() {
        let mut form = ProductForm::new();
        form.brand.select_other();
        form.brand.set_custom("Atelier Nine");
        form.brand.pick(7);
        assert!(!form.brand.other_active());
        assert_eq!(form.brand.custom(), "");
        assert_eq!(form.brand.selected(), Some(7));
    }

    #[test]
    fn other_with_empty_custom_blocks_submission() {
        let mut form = filled_form();
        form.brand.select_other();

        let err = form.build_payload(None).unwrap_err();
        assert!(!err.is_empty());
        assert_eq!(err, "Please enter a custom brand name");
    }

    #[test]
    fn image_cap_is_enforced_across_existing_and_new() {
        let mut form = ProductForm::new();
        form.existing_images = (0..19).map(|i| format!("/uploads/{}.jpg", i)).collect();
        form.add_image(ImageFile {
            file_name: "a.jpg".to_string(),
            bytes: vec![1],
        })
        .unwrap();

        let err = form
            .add_image(ImageFile {
                file_name: "b.jpg".to_string(),
                bytes: vec![2],
            })
            .unwrap_err();
        assert_eq!(err, "Maximum 20 images allowed");
        assert_eq!(form.new_images.len(), 1);
    }

    #[test]
    fn payload_maps_deepest_category_level() {
        let mut form = filled_form();
        form.category_id = Some(3);
        form.sub_category_id = Some(31);
        form.sub_sub_category_id = Some(311);

        let payload = form.build_payload(Some(12)).unwrap();
        assert_eq!(payload.category_id, Some(3));
        assert_eq!(payload.sub_category_id, Some(311));
        assert_eq!(payload.is_negotiable, Some(false));
    }

    #[test]
    fn payload_keeps_two_level_selection_when_no_third() {
        let mut form = filled_form();
        form.category_id = Some(3);
        form.sub_category_id = Some(31);

        let payload = form.build_payload(None).unwrap();
        assert_eq!(payload.sub_category_id, Some(31));
    }
}
