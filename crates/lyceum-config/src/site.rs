//! Site-wide copy and static asset settings.
//!
//! # Environment Variables
//!
//! - `SITE_INSTITUTE_NAME` (default: "Deshmukh College Of Pharmacy")
//! - `SITE_HERO_IMAGE`: background image of the section banners (default: "/header.webp")
//! - `SITE_EXAM_EMAIL` / `SITE_EXAM_PHONE`: examination cell contact
//! - `SITE_PUBLIC_DIR`: directory served for static assets (default: "public")

use std::path::PathBuf;

use crate::env::string_or;

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub institute_name: String,
    pub hero_image: Option<String>,
    pub exam_email: String,
    pub exam_phone: String,
    pub public_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            institute_name: "Deshmukh College Of Pharmacy".to_string(),
            hero_image: Some("/header.webp".to_string()),
            exam_email: "exam@nifd.edu".to_string(),
            exam_phone: "+91 9975469123".to_string(),
            public_dir: PathBuf::from("public"),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        // "none" turns the banner image off.
        let hero_image = match string_or("SITE_HERO_IMAGE", "/header.webp").as_str() {
            "none" => None,
            path => Some(path.to_string()),
        };

        Self {
            institute_name: string_or("SITE_INSTITUTE_NAME", &defaults.institute_name),
            hero_image,
            exam_email: string_or("SITE_EXAM_EMAIL", &defaults.exam_email),
            exam_phone: string_or("SITE_EXAM_PHONE", &defaults.exam_phone),
            public_dir: PathBuf::from(string_or("SITE_PUBLIC_DIR", "public")),
        }
    }
}
