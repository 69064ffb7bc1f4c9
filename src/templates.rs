use tera::Tera;

use crate::Result;

/// Builds the template registry from the pages compiled into the binary.
pub fn load() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("dogs.html", include_str!("../templates/dogs.html")),
    ])?;
    tera.set_escape_fn(escape_html);
    Ok(tera)
}

// Tera's default escaper also rewrites `/`, which mangles the URLs we embed.
fn escape_html(input: &str) -> String {
    html_escape::encode_quoted_attribute(input).into_owned()
}
