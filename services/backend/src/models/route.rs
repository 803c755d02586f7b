/// A query parameter forwarded to the upstream.
#[derive(Clone, Copy, Debug)]
pub struct QueryParam {
    /// Name as sent by the client
    pub name: &'static str,
    /// Name the upstream expects
    pub upstream_name: &'static str,
    /// Sent when the client omits the parameter. `None` means omit it entirely.
    pub default: Option<&'static str>,
}

impl QueryParam {
    pub const fn required(name: &'static str) -> Self {
        QueryParam { name, upstream_name: name, default: None }
    }

    pub const fn renamed(name: &'static str, upstream_name: &'static str) -> Self {
        QueryParam { name, upstream_name, default: None }
    }

    pub const fn optional(name: &'static str, default: &'static str) -> Self {
        QueryParam { name, upstream_name: name, default: Some(default) }
    }
}

/// Maps one local endpoint (relative to `/api`) onto one upstream endpoint.
///
/// Both `path` and `upstream` use `{name}` captures; every capture in `upstream`
/// must also appear in `path`.
#[derive(Clone, Copy, Debug)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub upstream: &'static str,
    pub params: &'static [QueryParam],
}

impl RouteDescriptor {
    /// Pairs each `{name}` in the local pattern with the matching raw segment of
    /// `request_path`, still percent-encoded.
    ///
    /// Segments are aligned from the end so the result doesn't depend on whether
    /// the `/api` prefix was stripped by nesting.
    pub fn raw_captures<'p>(&self, request_path: &'p str) -> Vec<(&'static str, &'p str)> {
        let depth = self.path.split('/').count();
        let segments: Vec<&'p str> = request_path.split('/').collect();
        let offset = segments.len().saturating_sub(depth);

        self.path
            .split('/')
            .zip(&segments[offset..])
            .filter_map(|(pattern, segment)| {
                pattern
                    .strip_prefix('{')
                    .and_then(|name| name.strip_suffix('}'))
                    .map(|name| (name, *segment))
            })
            .collect()
    }

    /// Substitutes captured path segments into the upstream template, unchanged.
    pub fn upstream_path<'a, I>(&self, captures: I) -> String
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut path = self.upstream.to_string();
        for (name, value) in captures {
            path = path.replace(&format!("{{{}}}", name), value);
        }
        path
    }
}

const LIMIT: QueryParam = QueryParam::optional("limit", "50");
const QUERY: QueryParam = QueryParam::required("query");
const SEARCH: &[QueryParam] = &[QUERY, LIMIT];

pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/modules",
        upstream: "/modules",
        params: &[QueryParam::optional("language", "english,hindi")],
    },
    RouteDescriptor { path: "/search/songs", upstream: "/search/songs", params: SEARCH },
    RouteDescriptor {
        path: "/songs",
        upstream: "/songs",
        params: &[QueryParam::renamed("ids", "id")],
    },
    RouteDescriptor { path: "/search/artists", upstream: "/search/artists", params: SEARCH },
    RouteDescriptor { path: "/artists/{artist_id}", upstream: "/artists/{artist_id}", params: &[] },
    RouteDescriptor {
        path: "/artists/{artist_id}/songs",
        upstream: "/artists/{artist_id}/songs",
        params: &[LIMIT],
    },
    RouteDescriptor { path: "/search/albums", upstream: "/search/albums", params: SEARCH },
    RouteDescriptor { path: "/albums/{album_id}", upstream: "/albums/{album_id}", params: &[] },
    RouteDescriptor {
        path: "/albums/{album_id}/songs",
        upstream: "/albums/{album_id}/songs",
        params: &[LIMIT],
    },
    RouteDescriptor { path: "/search/playlists", upstream: "/search/playlists", params: SEARCH },
    RouteDescriptor {
        path: "/playlists/{playlist_id}",
        upstream: "/playlists/{playlist_id}",
        params: &[],
    },
    RouteDescriptor {
        path: "/playlists/{playlist_id}/songs",
        upstream: "/playlists/{playlist_id}/songs",
        params: &[LIMIT],
    },
    RouteDescriptor { path: "/browse/new-releases", upstream: "/browse/new-releases", params: &[LIMIT] },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn captures(template: &str) -> HashSet<&str> {
        template
            .split('/')
            .filter_map(|seg| seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')))
            .collect()
    }

    #[test]
    fn paths_are_unique() {
        let paths: HashSet<_> = ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(paths.len(), ROUTES.len());
        assert_eq!(ROUTES.len(), 13);
    }

    #[test]
    fn upstream_captures_come_from_local_path() {
        for route in ROUTES {
            assert!(
                captures(route.upstream).is_subset(&captures(route.path)),
                "{} references a capture it cannot fill",
                route.upstream
            );
        }
    }

    #[test]
    fn raw_captures_keep_encoding() {
        let route = ROUTES
            .iter()
            .find(|r| r.path == "/artists/{artist_id}/songs")
            .unwrap();
        assert_eq!(
            route.raw_captures("/api/artists/a%3Fx/songs"),
            vec![("artist_id", "a%3Fx")]
        );
        assert_eq!(
            route.raw_captures("/artists/%FF/songs"),
            vec![("artist_id", "%FF")]
        );
    }

    #[test]
    fn substitutes_segments_verbatim() {
        let route = ROUTES
            .iter()
            .find(|r| r.path == "/albums/{album_id}/songs")
            .unwrap();
        assert_eq!(
            route.upstream_path([("album_id", "a%20b")]),
            "/albums/a%20b/songs"
        );
    }
}
