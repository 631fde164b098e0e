//! Canned reply texts the responder draws from.
//!
//! Every field has a default so a config file only needs to list the
//! replies it wants to change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Topic;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("script reply '{0}' must not be empty")]
    EmptyReply(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_resume_offer")]
    pub resume_offer: String,
    #[serde(default = "default_resume_uk")]
    pub resume_uk: String,
    #[serde(default = "default_resume_india")]
    pub resume_india: String,
    #[serde(default = "default_resume_reprompt")]
    pub resume_reprompt: String,
    #[serde(default = "default_skills")]
    pub skills: String,
    #[serde(default = "default_projects")]
    pub projects: String,
    #[serde(default = "default_education")]
    pub education: String,
    #[serde(default = "default_contact")]
    pub contact: String,
    #[serde(default = "default_experience")]
    pub experience: String,
    #[serde(default = "default_focus")]
    pub focus: String,
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_greeting() -> String {
    "Hello! I am Manthan's AI Assistant. Ask me about his skills, projects, or experience.".into()
}
fn default_resume_offer() -> String {
    "I have two versions of the resume available. Would you like the United Kingdom version or the India version?".into()
}
fn default_resume_uk() -> String {
    "Here is the UK version of Manthan's Resume: /Manthan_Mittal_Resume_UK.pdf".into()
}
fn default_resume_india() -> String {
    "Here is the India version of Manthan's Resume: /Manthan_Mittal_Resume_India.pdf".into()
}
fn default_resume_reprompt() -> String {
    "Please specify which version you would like: United Kingdom or India?".into()
}
fn default_skills() -> String {
    "Manthan's key tech stack includes Python, PyTorch, React, Node.js, MongoDB, AWS, and Oracle OCI.".into()
}
fn default_projects() -> String {
    "Key projects include Narrative-to-Clip (Text-to-Video AI), DocInsight (RAG System), and Web Task Autopilot (Autonomous Agents).".into()
}
fn default_education() -> String {
    "Manthan holds an MSc in Artificial Intelligence from the University of Essex (UK) and a BE in Information Technology from Ahmedabad Institute of Technology (India).".into()
}
fn default_contact() -> String {
    "You can reach him at manthanmittal93@gmail.com.".into()
}
fn default_experience() -> String {
    "He has experience as an AI Research Intern at DeepVision Labs and as a Full-Stack Engineer at Roxigym.".into()
}
fn default_focus() -> String {
    "Manthan is currently focused on AI, Machine Learning, and Full Stack Development.".into()
}
fn default_fallback() -> String {
    "I'm not sure about that. You can ask about my skills, projects, education, or ask to download my resume.".into()
}

impl Script {
    /// Reply text for a topic.
    pub fn text(&self, topic: Topic) -> &str {
        match topic {
            Topic::ResumeOffer => &self.resume_offer,
            Topic::ResumeUk => &self.resume_uk,
            Topic::ResumeIndia => &self.resume_india,
            Topic::ResumeReprompt => &self.resume_reprompt,
            Topic::Skills => &self.skills,
            Topic::Projects => &self.projects,
            Topic::Education => &self.education,
            Topic::Contact => &self.contact,
            Topic::Experience => &self.experience,
            Topic::Focus => &self.focus,
            Topic::Greeting => &self.greeting,
            Topic::Fallback => &self.fallback,
        }
    }

    /// Every reply must carry visible text.
    pub fn validate(&self) -> Result<(), ScriptError> {
        let fields: [(&'static str, &str); 12] = [
            ("greeting", &self.greeting),
            ("resume_offer", &self.resume_offer),
            ("resume_uk", &self.resume_uk),
            ("resume_india", &self.resume_india),
            ("resume_reprompt", &self.resume_reprompt),
            ("skills", &self.skills),
            ("projects", &self.projects),
            ("education", &self.education),
            ("contact", &self.contact),
            ("experience", &self.experience),
            ("focus", &self.focus),
            ("fallback", &self.fallback),
        ];
        match fields.iter().find(|(_, text)| text.trim().is_empty()) {
            Some((name, _)) => Err(ScriptError::EmptyReply(name)),
            None => Ok(()),
        }
    }
}

impl Default for Script {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            resume_offer: default_resume_offer(),
            resume_uk: default_resume_uk(),
            resume_india: default_resume_india(),
            resume_reprompt: default_resume_reprompt(),
            skills: default_skills(),
            projects: default_projects(),
            education: default_education(),
            contact: default_contact(),
            experience: default_experience(),
            focus: default_focus(),
            fallback: default_fallback(),
        }
    }
}
