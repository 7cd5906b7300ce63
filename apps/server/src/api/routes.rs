use pricewire_market_data::RangeQuery;

/// One fixed API route: an exact path mapped to its range query.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub range: RangeQuery,
    /// Return only the most recent bar instead of the whole history.
    pub latest_only: bool,
}

/// The complete route table. Matching is exact string equality.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/get_price_max",
        range: RangeQuery::new("max", "1wk"),
        latest_only: false,
    },
    Route {
        path: "/get_price_1y",
        range: RangeQuery::new("1y", "1d"),
        latest_only: false,
    },
    Route {
        path: "/get_price_3mo",
        range: RangeQuery::new("3mo", "1d"),
        latest_only: false,
    },
    Route {
        path: "/get_price_1mo",
        range: RangeQuery::new("1mo", "1h"),
        latest_only: false,
    },
    Route {
        path: "/get_price_5d",
        range: RangeQuery::new("5d", "60m"),
        latest_only: false,
    },
    Route {
        path: "/get_price_1d",
        range: RangeQuery::new("1d", "1m"),
        latest_only: false,
    },
    Route {
        path: "/get_price_live",
        range: RangeQuery::new("1d", "1m"),
        latest_only: true,
    },
];

pub fn resolve(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_seven_routes() {
        assert_eq!(ROUTES.len(), 7);
    }

    #[test]
    fn resolves_exact_paths_only() {
        let route = resolve("/get_price_1y").expect("route should exist");
        assert_eq!(route.range, RangeQuery::new("1y", "1d"));
        assert!(!route.latest_only);

        assert!(resolve("/get_price_1y/").is_none());
        assert!(resolve("/get_price_2y").is_none());
        assert!(resolve("get_price_1y").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn live_route_uses_one_day_of_minute_bars() {
        let route = resolve("/get_price_live").expect("route should exist");
        assert_eq!(route.range, RangeQuery::new("1d", "1m"));
        assert!(route.latest_only);
    }

    #[test]
    fn only_the_live_route_is_latest_only() {
        let latest_only: Vec<_> = ROUTES.iter().filter(|r| r.latest_only).collect();
        assert_eq!(latest_only.len(), 1);
        assert_eq!(latest_only[0].path, "/get_price_live");
    }
}
