use gang_impose::*;

fn a3_sheet() -> FlatSheetConfig {
    let (width_mm, height_mm) = PaperSize::A3.dimensions_mm();
    FlatSheetConfig::new(Dimension::new(width_mm, height_mm).unwrap())
}

#[test]
fn test_validation_flat_sheet_ok() {
    let config = SubstrateConfig::FlatSheet(a3_sheet());
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_negative_margin() {
    let mut sheet = a3_sheet();
    sheet.margins.left_mm = -1.0;

    let result = SubstrateConfig::FlatSheet(sheet).validate();
    match result {
        Err(LayoutError::Config(msg)) => assert!(msg.contains("negative")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_margins_consume_sheet() {
    let mut sheet = a3_sheet();
    sheet.margins = Margins::uniform(200.0); // A3 is 297mm wide

    let result = SubstrateConfig::FlatSheet(sheet).validate();
    match result {
        Err(LayoutError::Config(msg)) => assert!(msg.contains("usable width")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_forced_zero_rejected() {
    let mut sheet = a3_sheet();
    sheet.forced_columns = Some(0);

    let result = SubstrateConfig::FlatSheet(sheet).validate();
    match result {
        Err(LayoutError::Config(msg)) => assert!(msg.contains("forced column")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_roll() {
    let mut roll = RollConfig::new(320.0, 1000.0);
    assert!(SubstrateConfig::Roll(roll).validate().is_ok());

    roll.min_length_mm = 0.0;
    assert!(SubstrateConfig::Roll(roll).validate().is_err());

    roll.min_length_mm = 1000.0;
    roll.width_mm = -320.0;
    assert!(SubstrateConfig::Roll(roll).validate().is_err());
}

#[test]
fn test_dimension_rejects_non_positive() {
    assert!(Dimension::new(0.0, 100.0).is_err());
    assert!(Dimension::new(100.0, -5.0).is_err());
    assert!(Dimension::new(100.0, 100.0).is_ok());
}

#[test]
fn test_artwork_effective_size() {
    let page = ArtworkPage::new(100.0, 150.0).unwrap();
    assert_eq!(page.effective_size(), page.size);

    let turned = page.with_rotation(Rotation::Clockwise90);
    assert_eq!(turned.effective_size(), page.size.swapped());

    let upside_down = page.with_rotation(Rotation::Clockwise180);
    assert_eq!(upside_down.effective_size(), page.size);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_config() {
    use tempfile::NamedTempFile;

    let mut sheet = a3_sheet();
    sheet.margins = Margins::uniform(8.0);
    sheet.forced_rows = Some(2);
    sheet.forced_columns = Some(3);
    sheet.mode = ProductionMode::Duplicate;
    let config = SubstrateConfig::FlatSheet(sheet);

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Save
    config.save(path).await.unwrap();

    // Load
    let loaded = SubstrateConfig::load(path).await.unwrap();

    assert_eq!(loaded, config);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_malformed_config() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), b"not json")
        .await
        .unwrap();

    let result = SubstrateConfig::load(temp_file.path()).await;
    match result {
        Err(LayoutError::Config(msg)) => assert!(msg.contains("parse")),
        _ => panic!("Expected Config error"),
    }
}
