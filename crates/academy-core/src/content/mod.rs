//! Content selection for module detail pages.
//!
//! Hand-written bundles live in a static table keyed by module id; any id
//! without an entry gets a bundle templated from the module's own title.

mod bundles;
mod deep_dive;

pub use deep_dive::{deep_dive, Block, DeepDive, DeepDiveSection};

use serde::Serialize;

use crate::types::Module;

use bundles::{StaticBundle, BUNDLES};

/// Introduction, ordered topics and ordered suggestions for one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDetailBundle {
    pub introduction: String,
    pub learning_content: Vec<String>,
    pub learning_suggestions: Vec<String>,
}

impl ModuleDetailBundle {
    fn from_static(bundle: &StaticBundle) -> Self {
        Self {
            introduction: bundle.introduction.to_string(),
            learning_content: bundle.topics.iter().map(|s| s.to_string()).collect(),
            learning_suggestions: bundle.suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Select the content bundle for a module.
///
/// Exact id match against the static table; anything else falls back to the
/// templated bundle. Pure: repeated calls return equal bundles.
pub fn select_content(module: &Module) -> ModuleDetailBundle {
    match BUNDLES.iter().find(|b| b.id == module.id) {
        Some(bundle) => ModuleDetailBundle::from_static(bundle),
        None => {
            tracing::debug!("No dedicated content for {}, using template", module.id);
            fallback_bundle(module)
        }
    }
}

/// Ids with a dedicated bundle, in table order
pub fn known_content_ids() -> impl Iterator<Item = &'static str> {
    BUNDLES.iter().map(|b| b.id)
}

fn fallback_bundle(module: &Module) -> ModuleDetailBundle {
    let title = module.title.as_str();

    let mut introduction = format!(
        "本模块将带你系统了解「{title}」的核心概念与实际应用，帮助你在加密世界中建立扎实的基础。"
    );
    let summary = module.learning_content.trim();
    if !summary.is_empty() {
        introduction.push_str(summary);
    }

    let learning_content = vec![
        format!("{title}的基本概念与发展历程"),
        format!("{title}的核心原理与关键术语"),
        format!("{title}的主流项目与典型案例"),
        format!("{title}的实际操作流程"),
        format!("{title}相关的风险与安全注意事项"),
        format!("{title}的未来趋势与发展方向"),
    ];

    let learning_suggestions = vec![
        format!("先通读{title}的基础概念，再深入具体项目"),
        format!("结合推荐资源动手实践{title}的相关操作"),
        format!("加入{title}相关社区，与其他学习者交流经验"),
        format!("持续关注{title}领域的最新动态与研究报告"),
    ];

    ModuleDetailBundle {
        introduction,
        learning_content,
        learning_suggestions,
    }
}
