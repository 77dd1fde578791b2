/// Wraps the rendered body and a style string in the fixed page skeleton.
///
/// Both strings are substituted verbatim; neither is validated or escaped.
/// The skeleton declares UTF-8 so the preview survives any browser's
/// encoding guesswork.
pub fn compose(body: &str, style: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         {style}\n\
         </head>\n\
         <body>\n\
         {body}</body>\n\
         </html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn skeleton_embeds_body_and_style() {
        let html = compose("<p>hi</p>\n", "<style>p { color: red }</style>");
        assert_eq!(
            html,
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <style>p { color: red }</style>\n</head>\n<body>\n<p>hi</p>\n</body>\n</html>\n"
        );
    }

    #[test]
    fn style_is_not_escaped() {
        let html = compose("", "<style>a > b</style>");
        assert!(html.contains("<style>a > b</style>"));
    }

    #[test]
    fn declares_utf8() {
        assert!(compose("", "").contains("<meta charset=\"utf-8\">"));
    }
}
