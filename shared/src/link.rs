//! State of the link directory page: a list tab with instant search and an
//! operate tab holding one form shared by create and edit.

use std::collections::BTreeMap;

use crate::{LinkType, PageState, Web, notice::Notice};

/// Active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkTab {
    /// Searchable card list.
    #[default]
    List,
    /// Create/edit form.
    Operate,
}

/// What the operate form will do on submit.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormMode {
    /// Submit creates a new link.
    #[default]
    Create,
    /// Submit updates this record.
    Edit(Web),
}

impl FormMode {
    /// Title of the operate tab and its submit button.
    pub fn label(&self) -> &'static str {
        match self {
            FormMode::Create => "新增网站",
            FormMode::Edit(_) => "编辑网站",
        }
    }
}

/// Editable fields of the link form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LinkField {
    /// Site title, required.
    Title,
    /// Site description, required.
    Description,
    /// Webmaster email.
    Email,
    /// Icon url, required.
    Image,
    /// Site url.
    Url,
    /// Link type id, required.
    TypeId,
}

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkForm {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Webmaster email.
    pub email: String,
    /// Icon url.
    pub image: String,
    /// Site url.
    pub url: String,
    /// Selected type.
    pub type_id: Option<u32>,
}

/// Validation messages keyed by field.
pub type FieldErrors = BTreeMap<LinkField, &'static str>;

/// Validated form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDraft {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Webmaster email.
    pub email: Option<String>,
    /// Icon url.
    pub image: String,
    /// Site url.
    pub url: Option<String>,
    /// Link type id.
    pub type_id: u32,
}

/// Call to issue for a valid submit.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkSubmission {
    /// Create a link without id.
    Create(Web),
    /// Update an existing link.
    Update(Web),
}

impl LinkForm {
    /// Pre-fill from an existing record.
    pub fn from_web(web: &Web) -> Self {
        Self {
            title: web.title.clone(),
            description: web.description.clone(),
            email: web.email.clone().unwrap_or_default(),
            image: web.image.clone(),
            url: web.url.clone().unwrap_or_default(),
            type_id: Some(web.type_id),
        }
    }

    /// Write one text field; `TypeId` expects a numeric id or empty input.
    pub fn set(&mut self, field: LinkField, value: String) {
        match field {
            LinkField::Title => self.title = value,
            LinkField::Description => self.description = value,
            LinkField::Email => self.email = value,
            LinkField::Image => self.image = value,
            LinkField::Url => self.url = value,
            LinkField::TypeId => self.type_id = value.trim().parse().ok(),
        }
    }

    /// Check required fields.
    pub fn validate(&self) -> Result<LinkDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.title.trim().is_empty() {
            errors.insert(LinkField::Title, "网站标题不能为空");
        }
        if self.description.trim().is_empty() {
            errors.insert(LinkField::Description, "网站描述不能为空");
        }
        if self.image.trim().is_empty() {
            errors.insert(LinkField::Image, "网站图标不能为空");
        }
        let Some(type_id) = self.type_id else {
            errors.insert(LinkField::TypeId, "网站类型不能为空");
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LinkDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            email: optional(&self.email),
            image: self.image.clone(),
            url: optional(&self.url),
            type_id,
        })
    }
}

impl LinkDraft {
    /// Turn the draft into the call `mode` asks for. Edits merge the draft
    /// over the existing record so its id and server fields survive.
    pub fn into_submission(self, mode: &FormMode, types: &[LinkType]) -> LinkSubmission {
        let kind = types.iter().find(|item| item.id == self.type_id).cloned();
        match mode {
            FormMode::Create => LinkSubmission::Create(Web {
                id: None,
                title: self.title,
                description: self.description,
                email: self.email,
                image: self.image,
                url: self.url,
                type_id: self.type_id,
                kind,
                create_time: None,
            }),
            FormMode::Edit(existing) => {
                let mut merged = existing.clone();
                if merged.type_id != self.type_id {
                    merged.kind = kind;
                }
                merged.title = self.title;
                merged.description = self.description;
                merged.email = self.email;
                merged.image = self.image;
                merged.url = self.url;
                merged.type_id = self.type_id;
                LinkSubmission::Update(merged)
            },
        }
    }
}

/// Links whose title or description contains `search` (case-sensitive).
pub fn filter_links(links: &[Web], search: &str) -> Vec<Web> {
    links
        .iter()
        .filter(|item| item.title.contains(search) || item.description.contains(search))
        .cloned()
        .collect()
}

/// Link page state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinkPageState {
    /// Active tab.
    pub tab: LinkTab,
    /// Create or edit.
    pub mode: FormMode,
    /// Search text of the list tab.
    pub search: String,
    /// Last fetched links, in server order.
    pub links: Vec<Web>,
    /// `links` narrowed by `search`.
    pub visible: Vec<Web>,
    /// Options of the type select.
    pub types: Vec<LinkType>,
    /// Operate form input.
    pub form: LinkForm,
    /// Validation messages of the last submit.
    pub errors: FieldErrors,
    /// A fetch or mutation is in flight.
    pub loading: bool,
    /// Row awaiting delete confirmation.
    pub pending_delete: Option<u32>,
    /// Latest notice.
    pub notice: Option<Notice>,
}

/// Events applied to a [`LinkPageState`].
#[derive(Debug, Clone, PartialEq)]
pub enum LinkAction {
    /// A request started.
    Loading,
    /// Links arrived.
    Loaded(Vec<Web>),
    /// Link types arrived.
    TypesLoaded(Vec<LinkType>),
    /// A request failed.
    Failed(String),
    /// Search text changed.
    Search(String),
    /// Tab switched by the operator.
    SwitchTab(LinkTab),
    /// Start editing a record.
    Edit(Web),
    /// One form field changed.
    Input(LinkField, String),
    /// Submit was rejected by validation.
    Invalid(FieldErrors),
    /// Create or update succeeded.
    Submitted(Notice),
    /// Ask for confirmation before deleting `id`.
    RequestDelete(u32),
    /// Confirmation dismissed.
    CancelDelete,
    /// Confirmation accepted.
    ConfirmDelete,
    /// Show a notice.
    Notify(Notice),
    /// Hide the notice.
    DismissNotice,
}

impl LinkPageState {
    fn reset_form(&mut self) {
        self.form = LinkForm::default();
        self.errors.clear();
        self.mode = FormMode::Create;
    }

    fn refilter(&mut self) {
        self.visible = filter_links(&self.links, &self.search);
    }
}

impl PageState for LinkPageState {
    type Action = LinkAction;

    fn apply(&mut self, action: Self::Action) {
        match action {
            LinkAction::Loading => self.loading = true,
            LinkAction::Loaded(links) => {
                self.links = links;
                self.loading = false;
                self.refilter();
            },
            LinkAction::TypesLoaded(types) => self.types = types,
            LinkAction::Failed(message) => {
                self.loading = false;
                self.notice = Some(Notice::error(message));
            },
            LinkAction::Search(search) => {
                self.search = search;
                self.refilter();
            },
            LinkAction::SwitchTab(tab) => {
                self.tab = tab;
                self.reset_form();
            },
            LinkAction::Edit(web) => {
                self.tab = LinkTab::Operate;
                self.errors.clear();
                self.form = LinkForm::from_web(&web);
                self.mode = FormMode::Edit(web);
            },
            LinkAction::Input(field, value) => {
                self.form.set(field, value);
                self.errors.remove(&field);
            },
            LinkAction::Invalid(errors) => self.errors = errors,
            LinkAction::Submitted(notice) => {
                self.notice = Some(notice);
                self.tab = LinkTab::List;
                self.reset_form();
            },
            LinkAction::RequestDelete(id) => self.pending_delete = Some(id),
            LinkAction::CancelDelete => self.pending_delete = None,
            LinkAction::ConfirmDelete => {
                self.pending_delete = None;
                self.loading = true;
            },
            LinkAction::Notify(notice) => self.notice = Some(notice),
            LinkAction::DismissNotice => self.notice = None,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn web(id: u32, title: &str, description: &str) -> Web {
        Web {
            id: Some(id),
            title: title.to_string(),
            description: description.to_string(),
            email: None,
            image: "https://example.com/icon.png".to_string(),
            url: Some("https://example.com".to_string()),
            type_id: 1,
            kind: Some(LinkType {
                id: 1,
                name: "博客".to_string(),
            }),
            create_time: Some("1700000000000".to_string()),
        }
    }

    #[test]
    fn search_matches_title_or_description_case_sensitively() {
        let links = vec![
            web(1, "Rust Blog", "systems"),
            web(2, "Notes", "about rust"),
            web(3, "Misc", "nothing"),
        ];
        let titles = |items: Vec<Web>| items.into_iter().map(|w| w.title).collect::<Vec<_>>();
        assert_eq!(titles(filter_links(&links, "rust")), vec!["Notes"]);
        assert_eq!(titles(filter_links(&links, "Rust")), vec!["Rust Blog"]);
        assert_eq!(filter_links(&links, "").len(), 3);
    }

    #[test]
    fn visible_list_follows_search_and_reload() {
        let mut state = LinkPageState::default();
        state.apply(LinkAction::Loaded(vec![web(1, "A", "x"), web(2, "B", "y")]));
        state.apply(LinkAction::Search("B".to_string()));
        assert_eq!(state.visible.len(), 1);
        state.apply(LinkAction::Loaded(vec![web(1, "A", "x"), web(3, "BB", "z")]));
        assert_eq!(state.visible[0].id, Some(3));
    }

    #[test]
    fn switching_tabs_resets_form_and_mode() {
        let mut state = LinkPageState::default();
        state.apply(LinkAction::Edit(web(5, "A", "d")));
        assert_eq!(state.tab, LinkTab::Operate);
        assert_eq!(state.form.title, "A");
        state.apply(LinkAction::SwitchTab(LinkTab::List));
        assert_eq!(state.mode, FormMode::Create);
        assert_eq!(state.form, LinkForm::default());
    }

    #[test]
    fn successful_submit_returns_to_list_in_create_mode() {
        let mut state = LinkPageState::default();
        state.apply(LinkAction::Edit(web(5, "A", "d")));
        state.apply(LinkAction::Submitted(Notice::success("ok")));
        assert_eq!(state.tab, LinkTab::List);
        assert_eq!(state.mode, FormMode::Create);
        assert_eq!(state.form, LinkForm::default());
    }

    #[test]
    fn validation_requires_title_description_image_and_type() {
        let errors = LinkForm::default().validate().expect_err("empty form");
        assert_eq!(errors.len(), 4);

        let form = LinkForm {
            title: "Thrive".to_string(),
            description: "blog".to_string(),
            email: String::new(),
            image: "https://example.com/logo.png".to_string(),
            url: String::new(),
            type_id: Some(2),
        };
        let draft = form.validate().expect("valid form");
        assert_eq!(draft.email, None);
        assert_eq!(draft.url, None);
    }

    #[test]
    fn edit_submission_merges_over_existing_record() {
        let existing = web(5, "A", "d");
        let mut form = LinkForm::from_web(&existing);
        form.set(LinkField::Title, "B".to_string());
        let draft = form.validate().expect("valid form");
        let LinkSubmission::Update(updated) =
            draft.into_submission(&FormMode::Edit(existing.clone()), &[])
        else {
            panic!("edit mode must update");
        };
        assert_eq!(updated.id, Some(5));
        assert_eq!(updated.title, "B");
        assert_eq!(updated.create_time, existing.create_time);
        assert_eq!(updated.kind, existing.kind);
    }

    #[test]
    fn clearing_email_and_url_on_edit_reaches_the_update_body() {
        let existing = Web {
            email: Some("old@example.com".to_string()),
            ..web(5, "A", "d")
        };
        let mut form = LinkForm::from_web(&existing);
        form.set(LinkField::Email, String::new());
        form.set(LinkField::Url, String::new());
        let draft = form.validate().expect("valid form");
        let LinkSubmission::Update(updated) = draft.into_submission(&FormMode::Edit(existing), &[])
        else {
            panic!("edit mode must update");
        };

        let body = serde_json::to_value(&updated).expect("serialize update");
        assert_eq!(body["id"], 5);
        assert_eq!(body.get("email"), Some(&serde_json::Value::Null));
        assert_eq!(body.get("url"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn create_submission_has_no_id_and_resolves_type() {
        let form = LinkForm {
            title: "T".to_string(),
            description: "D".to_string(),
            email: "a@b.c".to_string(),
            image: "i".to_string(),
            url: String::new(),
            type_id: Some(2),
        };
        let types = vec![LinkType {
            id: 2,
            name: "工具".to_string(),
        }];
        let submission = form
            .validate()
            .expect("valid form")
            .into_submission(&FormMode::Create, &types);
        let LinkSubmission::Create(created) = submission else {
            panic!("create mode must create");
        };
        assert_eq!(created.id, None);
        assert_eq!(created.email.as_deref(), Some("a@b.c"));
        assert_eq!(created.kind.map(|k| k.name).as_deref(), Some("工具"));
    }
}
