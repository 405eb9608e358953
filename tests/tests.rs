#[cfg(test)]
mod tests {
    use energy_markets_dashboard::hooks::use_prices::PriceState;
    use energy_markets_dashboard::hooks::use_prod_cons::ProdConsState;
    use energy_markets_dashboard::models::{
        energy::EnergyType,
        error::AppError,
        price::{PriceHistory, PricePoint},
        prod_cons::{ProdConsData, ProdConsRow, Year},
    };
    use std::rc::Rc;

    // Helper function to create test price points
    fn create_test_points() -> Vec<PricePoint> {
        vec![
            PricePoint {
                period: "2020".to_string(),
                benchmark: "Brent".to_string(),
                value: 50.0,
            },
            PricePoint {
                period: "2020".to_string(),
                benchmark: "WTI".to_string(),
                value: 45.0,
            },
            PricePoint {
                period: "2021".to_string(),
                benchmark: "Brent".to_string(),
                value: 70.0,
            },
        ]
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_fetch_display() {
        let error = AppError::FetchError("Connection refused".to_string());
        assert_eq!(error.to_string(), "Fetch error: Connection refused");
    }

    #[test]
    fn test_app_error_selection_display() {
        let error = AppError::SelectionError("Gas".to_string());
        assert_eq!(error.to_string(), "No data for energy type: Gas");
    }

    #[test]
    fn test_app_error_config_display() {
        let error = AppError::ConfigError("Invalid energy type: Coal".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid energy type: Coal"
        );
    }

    // ===== Price Model Tests =====

    #[test]
    fn test_price_point_deserialization() {
        let json = r#"{
            "period": "2020-01",
            "benchmark": "Brent",
            "value": 50.5
        }"#;

        let point: PricePoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.period, "2020-01");
        assert_eq!(point.benchmark, "Brent");
        assert_eq!(point.value, 50.5);
    }

    #[test]
    fn test_price_response_produces_one_series_per_benchmark() {
        // Shape of the /api/price response
        let json = r#"[
            {"period": "2020", "benchmark": "WTI", "value": 45},
            {"period": "2020", "benchmark": "Brent", "value": 50}
        ]"#;

        let points: Vec<PricePoint> = serde_json::from_str(json).unwrap();
        let history = PriceHistory::new(points);

        let series = history.series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "WTI");
        assert_eq!(series[1].name, "Brent");
        assert_eq!(series[0].y, vec![45.0]);
        assert_eq!(series[1].y, vec![50.0]);
    }

    #[test]
    fn test_price_series_keep_original_point_order() {
        let history = PriceHistory::new(create_test_points());

        let series = history.series();
        let brent = &series[0];
        assert_eq!(brent.name, "Brent");
        assert_eq!(brent.x, vec!["2020", "2021"]);
        assert_eq!(brent.y, vec![50.0, 70.0]);
    }

    // ===== Production/Consumption Model Tests =====

    fn parse_prod_cons(json: &str) -> ProdConsData {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_prod_cons_response_selection() {
        let data = parse_prod_cons(
            r#"{
                "oil": [{"Year": 2020, "Production": 10, "Consumption": 8}],
                "gas": [{"Year": 2020, "Production": 5, "Consumption": 6}]
            }"#,
        );

        let (production, consumption) = data.series(EnergyType::Oil).unwrap();
        assert_eq!(production.x, vec!["2020"]);
        assert_eq!(production.y, vec![10.0]);
        assert_eq!(consumption.y, vec![8.0]);
    }

    #[test]
    fn test_prod_cons_accepts_wire_spelling_of_consumption() {
        // One deployed backend spells the field "Consumtion"
        let data = parse_prod_cons(
            r#"{
                "oil": [{"Year": 2020, "Production": 10, "Consumtion": 8}],
                "gas": [{"Year": 2020, "Production": 5, "Consumtion": 6}]
            }"#,
        );

        let (_, consumption) = data.series(EnergyType::Gas).unwrap();
        assert_eq!(consumption.y, vec![6.0]);
    }

    #[test]
    fn test_prod_cons_missing_partition() {
        let data = parse_prod_cons(r#"{"oil": [{"Year": 2020, "Production": 10, "Consumption": 8}]}"#);

        assert!(data.series(EnergyType::Oil).is_ok());
        assert_eq!(
            data.series(EnergyType::Gas),
            Err(AppError::SelectionError("Gas".to_string()))
        );
    }

    #[test]
    fn test_prod_cons_row_year_as_string() {
        let row: ProdConsRow =
            serde_json::from_str(r#"{"Year": "1995", "Production": 1.5, "Consumption": 2.5}"#)
                .unwrap();
        assert_eq!(row.year, Year::Text("1995".to_string()));
        assert_eq!(row.production, 1.5);
        assert_eq!(row.consumption, 2.5);
    }

    #[test]
    fn test_selection_switch_renders_final_partition() {
        // Last write wins: whatever the selection ends on decides the rows
        let data = parse_prod_cons(
            r#"{
                "oil": [{"Year": 2020, "Production": 10, "Consumption": 8}],
                "gas": [{"Year": 2020, "Production": 5, "Consumption": 6}]
            }"#,
        );

        let _ = data.series(EnergyType::Gas).unwrap();
        let (production, _) = data.series(EnergyType::Oil).unwrap();
        assert_eq!(production.y, vec![10.0]);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let data = parse_prod_cons(
            r#"{
                "oil": [{"Year": 2020, "Production": 10, "Consumption": 8}],
                "gas": [{"Year": 2020, "Production": 5, "Consumption": 6}]
            }"#,
        );

        assert_eq!(
            data.series(EnergyType::Oil).unwrap(),
            data.series(EnergyType::Oil).unwrap()
        );
    }

    // ===== Energy Type Tests =====

    #[test]
    fn test_energy_type_rejects_unknown_values() {
        assert!("Coal".parse::<EnergyType>().is_err());
        assert!("OilGas".parse::<EnergyType>().is_err());
        assert_eq!("oil".parse::<EnergyType>().unwrap(), EnergyType::Oil);
    }

    #[test]
    fn test_energy_type_display() {
        assert_eq!(EnergyType::Oil.to_string(), "Oil");
        assert_eq!(EnergyType::Gas.to_string(), "Gas");
    }

    // ===== Data State Tests =====

    #[test]
    fn test_price_state_data_extraction() {
        let history = Rc::new(PriceHistory::new(create_test_points()));
        let loaded = PriceState::Loaded(history.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &history);
        assert!(!loaded.is_loading());

        let loading = PriceState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let error = PriceState::Error("Test error".to_string());
        assert!(error.data().is_none());
        assert_eq!(error.error(), Some("Test error"));
    }

    #[test]
    fn test_prod_cons_state_data_extraction() {
        let data = Rc::new(parse_prod_cons(
            r#"{"oil": [{"Year": 2020, "Production": 10, "Consumption": 8}]}"#,
        ));
        let loaded = ProdConsState::Loaded(data.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &data);

        let error = ProdConsState::Error("Test error".to_string());
        assert!(error.data().is_none());
        assert_eq!(error.error(), Some("Test error"));
    }

    #[test]
    fn test_data_state_equality() {
        let state1 = PriceState::Loading;
        let state2 = PriceState::Loading;
        assert_eq!(state1, state2);

        let history1 = Rc::new(PriceHistory::new(create_test_points()));
        let history2 = Rc::new(PriceHistory::new(create_test_points()));
        assert_eq!(
            PriceState::Loaded(history1),
            PriceState::Loaded(history2)
        );
    }
}
