use crate::Route;

/// Reduce a location pathname to its page slug the way the static site
/// addressed pages: last path segment, minus any ".html" suffix, with the
/// empty path meaning the index page.
pub fn page_slug(pathname: &str) -> &str {
    let last = pathname.rsplit('/').next().unwrap_or("");
    let last = last.strip_suffix(".html").unwrap_or(last);

    if last.is_empty() {
        "index"
    } else {
        last
    }
}

/// Map a legacy static-site path onto its route.  Pages we never served land
/// on Home.
pub fn route_for_path(pathname: &str) -> Route {
    match page_slug(pathname) {
        "index" => Route::Home {},
        "projects" => Route::Projects {},
        "gallery" => Route::Gallery {},
        "contact" => Route::Contact {},
        other => {
            tracing::debug!("unknown legacy path {other}, falling back to home");
            Route::Home {}
        }
    }
}

/// Class for a nav button, with the active marker iff it points at the
/// current page.
pub fn nav_class(current: &Route, target: &Route) -> &'static str {
    if current == target {
        "nav-btn active"
    } else {
        "nav-btn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_handles_index_forms() {
        assert_eq!(page_slug(""), "index");
        assert_eq!(page_slug("/"), "index");
        assert_eq!(page_slug("/index.html"), "index");
    }

    #[test]
    fn slug_strips_html_suffix() {
        assert_eq!(page_slug("/projects.html"), "projects");
        assert_eq!(page_slug("/nested/dir/gallery.html"), "gallery");
    }

    #[test]
    fn slug_passes_plain_segments() {
        assert_eq!(page_slug("/contact"), "contact");
        assert_eq!(page_slug("contact"), "contact");
    }

    #[test]
    fn legacy_paths_resolve() {
        assert_eq!(route_for_path("/index.html"), Route::Home {});
        assert_eq!(route_for_path("/projects.html"), Route::Projects {});
        assert_eq!(route_for_path("/gallery"), Route::Gallery {});
        assert_eq!(route_for_path("/made-up.html"), Route::Home {});
    }

    #[test]
    fn exactly_one_nav_button_active() {
        let targets = [
            Route::Home {},
            Route::Projects {},
            Route::Gallery {},
            Route::Contact {},
        ];

        for current in &targets {
            let active = targets
                .iter()
                .filter(|target| nav_class(current, target) == "nav-btn active")
                .count();
            assert_eq!(active, 1);
        }
    }
}
