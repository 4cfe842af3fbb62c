use serde::{Deserialize, Serialize};

/// 作品集資料：每個區段都可以獨立缺席 (序列化為 `null`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioPayload {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub photo: Option<String>,
    pub contact: Option<ContactInfo>,
    pub skills: Option<Vec<Skill>>,
    pub experience: Option<Vec<Experience>>,
    pub volunteer: Option<Vec<Volunteer>>,
    pub projects: Option<Vec<Project>>,
    pub site: Option<serde_json::Value>,
    pub legal: Option<serde_json::Value>,
    pub homelab: Option<serde_json::Value>,
}

impl PortfolioPayload {
    /// Fills every section still missing in `self` from `other`.
    pub fn merge(&mut self, other: PortfolioPayload) {
        fn fill<T>(slot: &mut Option<T>, value: Option<T>) {
            if slot.is_none() {
                *slot = value;
            }
        }

        fill(&mut self.name, other.name);
        fill(&mut self.title, other.title);
        fill(&mut self.bio, other.bio);
        fill(&mut self.photo, other.photo);
        fill(&mut self.contact, other.contact);
        fill(&mut self.skills, other.skills);
        fill(&mut self.experience, other.experience);
        fill(&mut self.volunteer, other.volunteer);
        fill(&mut self.projects, other.projects);
        fill(&mut self.site, other.site);
        fill(&mut self.legal, other.legal);
        fill(&mut self.homelab, other.homelab);
    }

    pub fn profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            title: self.title.clone(),
            bio: self.bio.clone(),
            photo: self.photo.clone(),
            contact: self.contact.clone(),
        }
    }
}

/// `/api/profile` 與 `/api/about` 的回應
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub photo: Option<String>,
    pub contact: Option<ContactInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub discord: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub period: String,
    pub organization: String,
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

/// 聯絡表單原始輸入；欄位缺漏交給驗證階段處理
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

/// Status prober result: which candidate answered, and what it said.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    pub source: String,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub username: String,
    pub avatar_url: Option<String>,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub timestamp: String,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}
