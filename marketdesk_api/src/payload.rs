//! Multipart request bodies for product create/update.

use reqwest::multipart::{Form, Part};

/// An image attachment for a product form: the original file name plus its
/// raw bytes.
#[derive(Clone, Debug)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Multipart body for `POST /v2/product/admin/add` and
/// `PUT /v2/product/{id}`.
///
/// Field rules match what the backend expects from the dashboard: optional
/// text fields are left out entirely when empty, numeric ids are
/// stringified, id lists are comma-joined, and booleans are always sent as
/// literal "true"/"false" when set. New images travel as file parts named
/// `images`; image URLs already on the product are echoed back as indexed
/// `existingImages[i]` fields so the backend keeps them.
#[derive(Default, Clone, Debug)]
pub struct ProductPayload {
    pub user_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub category_id: Option<i64>,
    /// Receives the deepest selected category level; see the product form
    /// controller for the mapping.
    pub sub_category_id: Option<i64>,
    pub brand_id: Option<i64>,
    pub custom_brand: String,
    pub size_id: Option<i64>,
    pub condition_id: Option<i64>,
    pub color_ids: Vec<i64>,
    pub custom_color: String,
    pub material_ids: Vec<i64>,
    pub custom_material: String,
    pub is_negotiable: Option<bool>,
    pub status: Option<i64>,
    /// Passthrough fields from bulk upload descriptors, appended verbatim.
    pub extra: Vec<(String, String)>,
    pub existing_images: Vec<String>,
    pub images: Vec<ImageFile>,
}

impl ProductPayload {
    pub(crate) fn into_form(self) -> Form {
        let mut form = Form::new();

        if let Some(user_id) = self.user_id {
            form = form.text("user_id", user_id.to_string());
        }
        if !self.title.is_empty() {
            form = form.text("title", self.title);
        }
        if !self.description.is_empty() {
            form = form.text("description", self.description);
        }
        if let Some(price) = self.price {
            form = form.text("price", price.to_string());
        }
        if let Some(category_id) = self.category_id {
            form = form.text("category_id", category_id.to_string());
        }
        if let Some(sub_category_id) = self.sub_category_id {
            form = form.text("sub_category_id", sub_category_id.to_string());
        }
        if let Some(brand_id) = self.brand_id {
            form = form.text("brand_id", brand_id.to_string());
        }
        if !self.custom_brand.is_empty() {
            form = form.text("custom_brand", self.custom_brand);
        }
        if let Some(size_id) = self.size_id {
            form = form.text("size_id", size_id.to_string());
        }
        if let Some(condition_id) = self.condition_id {
            form = form.text("condition_id", condition_id.to_string());
        }
        if !self.color_ids.is_empty() {
            form = form.text("color_ids", join_ids(&self.color_ids));
        }
        if !self.custom_color.is_empty() {
            form = form.text("custom_color", self.custom_color);
        }
        if !self.material_ids.is_empty() {
            form = form.text("material_ids", join_ids(&self.material_ids));
        }
        if !self.custom_material.is_empty() {
            form = form.text("custom_material", self.custom_material);
        }
        if let Some(is_negotiable) = self.is_negotiable {
            form = form.text("is_negotiable", if is_negotiable { "true" } else { "false" });
        }
        if let Some(status) = self.status {
            form = form.text("status", status.to_string());
        }
        for (key, value) in self.extra {
            form = form.text(key, value);
        }
        for (i, image_url) in self.existing_images.into_iter().enumerate() {
            form = form.text(format!("existingImages[{}]", i), image_url);
        }
        for image in self.images {
            form = form.part(
                "images",
                Part::bytes(image.bytes).file_name(image.file_name),
            );
        }
        form
    }
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_ids_comma_separates() {
        assert_eq!(join_ids(&[3, 7]), "3,7");
        assert_eq!(join_ids(&[5]), "5");
        assert_eq!(join_ids(&[]), "");
    }
}
