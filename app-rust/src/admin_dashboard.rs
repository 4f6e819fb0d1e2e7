use crate::{messages, Route, ViewState};
use picture_link_sdk::{
    validation::{self, LinkFields},
    AuthService, LinkService, PictureLink, Session,
};
use std::{path::Path, sync::Arc};

/// Editor fields for creating or editing a picture link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkForm {
    pub title: String,
    pub description: String,
    pub button_label: String,
    pub target_url: String,
    /// Local path of the picked image.
    pub selected_image_path: String,
}

impl LinkForm {
    fn fields(&self) -> LinkFields<'_> {
        LinkFields {
            title: &self.title,
            button_label: &self.button_label,
            target_url: &self.target_url,
        }
    }
}

impl From<&PictureLink> for LinkForm {
    fn from(link: &PictureLink) -> Self {
        Self {
            title: link.title.clone(),
            description: link.description.clone(),
            button_label: link.button_label.clone(),
            target_url: link.target_url.clone(),
            selected_image_path: link.local_image_path.clone(),
        }
    }
}

/// Management screen for administrators.
pub struct AdminDashboard {
    auth: Arc<dyn AuthService>,
    links: Arc<dyn LinkService>,
    pub state: ViewState,
    pub picture_links: Vec<PictureLink>,
    pub form: LinkForm,
    /// The link being edited while `is_edit_mode` is set.
    pub selected: Option<PictureLink>,
    pub is_edit_mode: bool,
    pub current_session: Option<Session>,
}

impl AdminDashboard {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthService>, links: Arc<dyn LinkService>) -> Self {
        Self {
            auth,
            links,
            state: ViewState::new("Admin Dashboard"),
            picture_links: Vec::new(),
            form: LinkForm::default(),
            selected: None,
            is_edit_mode: false,
            current_session: None,
        }
    }

    pub async fn initialize(&mut self) {
        self.current_session = self.auth.current_session();
        self.load().await;
    }

    pub async fn load(&mut self) {
        if !self.state.begin() {
            return;
        }
        self.picture_links = self.links.list_all().await;
        self.state.finish();
    }

    /// Uploads the picked image, then creates a link from the form. The new
    /// link goes to the top of the list.
    pub async fn create(&mut self) {
        if !self.state.begin() {
            return;
        }
        self.create_from_form().await;
        self.state.finish();
    }

    async fn create_from_form(&mut self) {
        if let Err(error) =
            validation::validate_new_link_fields(self.form.fields(), &self.form.selected_image_path)
        {
            self.state.set_client_error(error);
            return;
        }

        let image_path = self.form.selected_image_path.clone();
        let image_url = self.upload(&image_path).await;
        if image_url.is_empty() {
            self.state.set_error(messages::UPLOAD_FAILED);
            return;
        }

        let created_by = self
            .current_session
            .as_ref()
            .map_or(messages::UNKNOWN_AUTHOR, |session| session.email.as_str())
            .to_string();
        let link = PictureLink::new(
            self.form.title.clone(),
            self.form.button_label.clone(),
            self.form.target_url.clone(),
        )
        .with_description(self.form.description.clone())
        .with_image(image_url, image_path)
        .with_created_by(created_by);

        if self.links.create(&link).await {
            tracing::info!(id = link.id(), "created picture link");
            self.picture_links.insert(0, link);
            self.clear_form();
            self.state.notice = Some(messages::LINK_CREATED.to_string());
        } else {
            self.state.set_error(messages::CREATE_FAILED);
        }
    }

    /// Loads `link` into the form for editing.
    pub fn begin_edit(&mut self, link: &PictureLink) {
        self.form = LinkForm::from(link);
        self.selected = Some(link.clone());
        self.is_edit_mode = true;
    }

    /// Saves the form into the selected link. A new image is uploaded only
    /// when the picked path differs from the link's current one.
    pub async fn update(&mut self) {
        if self.selected.is_none() || !self.state.begin() {
            return;
        }
        self.update_from_form().await;
        self.state.finish();
    }

    async fn update_from_form(&mut self) {
        if let Err(error) = validation::validate_link_fields(self.form.fields()) {
            self.state.set_client_error(error);
            return;
        }
        let Some(mut link) = self.selected.clone() else {
            return;
        };

        link.title.clone_from(&self.form.title);
        link.description.clone_from(&self.form.description);
        link.button_label.clone_from(&self.form.button_label);
        link.target_url.clone_from(&self.form.target_url);

        let image_path = self.form.selected_image_path.clone();
        if !image_path.is_empty() && image_path != link.local_image_path {
            let image_url = self.upload(&image_path).await;
            // A failed re-upload keeps the previous image.
            if !image_url.is_empty() {
                link.image_url = image_url;
                link.local_image_path = image_path;
            }
        }

        if self.links.update(&mut link).await {
            if let Some(existing) = self
                .picture_links
                .iter_mut()
                .find(|existing| existing.id() == link.id())
            {
                *existing = link;
            }
            self.clear_form();
            self.state.notice = Some(messages::LINK_UPDATED.to_string());
        } else {
            self.state.set_error(messages::UPDATE_FAILED);
        }
    }

    /// Deletes the link with `id`. Confirmation is up to the caller.
    pub async fn delete(&mut self, id: &str) {
        if !self.state.begin() {
            return;
        }
        if self.links.delete(id).await {
            self.picture_links.retain(|link| link.id() != id);
            self.state.notice = Some(messages::LINK_DELETED.to_string());
        } else {
            self.state.set_error(messages::DELETE_FAILED);
        }
        self.state.finish();
    }

    pub fn cancel_edit(&mut self) {
        self.clear_form();
    }

    pub async fn logout(&mut self) -> Route {
        self.auth.logout().await;
        self.current_session = None;
        Route::LoginSelection
    }

    async fn upload(&self, image_path: &str) -> String {
        let path = Path::new(image_path);
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            return String::new();
        };
        self.links.upload_image(path, file_name).await
    }

    fn clear_form(&mut self) {
        self.form = LinkForm::default();
        self.selected = None;
        self.is_edit_mode = false;
        self.state.clear_error();
    }
}
