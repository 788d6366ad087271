//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::ContentType;
use crate::Folio;

const CONFIG: &str = r#"# Portfolio configuration

# Site
title: Portfolio
description: Full Stack Developer Portfolio
author: Giuseppe Tamayo C.
language: es
locales: [es, en]

# URL
url: http://localhost:3000
root: /

# Directory
content_dir: content
public_dir: public
style_guide: ui-code-style-gtc.md

# Writing
content_ext: mdx
"#;

const GLOBAL: &str = r#"---
name: Giuseppe Tamayo C.
role: Full Stack Developer
role_es: Desarrollador Full Stack
socials:
  linkedin: https://www.linkedin.com/
  email: mailto:hello@example.com
---
"#;

const HOME: &str = r#"---
title: Home
---

# Hola

Bienvenido a mi portafolio.
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, CONFIG)?;
    }

    let folio = Folio::new(target_dir)?;
    for kind in ContentType::ALL {
        fs::create_dir_all(folio.content_dir.join(kind.dir_name()))?;
    }

    let pages = folio.content_dir.join(ContentType::Pages.dir_name());
    for (name, text) in [("global", GLOBAL), ("home", HOME)] {
        let path = pages.join(format!("{}.{}", name, folio.config.content_ext));
        if !path.exists() {
            fs::write(&path, text)?;
        }
    }

    Ok(())
}
