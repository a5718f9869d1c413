use crate::core::language::LanguageId;

pub fn main() -> anyhow::Result<()> {
    for id in LanguageId::ALL {
        let profile = id.profile();
        let exts: Vec<String> = profile.extensions.iter().map(|e| format!(".{e}")).collect();
        println!(
            "{:<8} {:<7} {:>3} keywords, {:>3} operators  [{}]",
            id.to_string(),
            id.display_name(),
            profile.keywords.len(),
            profile.operators.len(),
            exts.join(" ")
        );
    }
    Ok(())
}
