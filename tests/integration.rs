// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Size, Vector};
use iced_folio::annotation::{self, Annotator, Tool};
use iced_folio::bookmarks::BookmarkStore;
use iced_folio::capture::{self, CropRegion, Handedness};
use iced_folio::config::{self, Config};
use iced_folio::document::{PageLoader, PageSource, RenderedPage};
use iced_folio::error::Result;
use iced_folio::export;
use iced_folio::i18n::fluent::I18n;
use iced_folio::layout::FitLayout;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Solid-color pages, 10x20 points each.
struct FlatSource {
    pages: usize,
}

impl PageSource for FlatSource {
    fn page_count(&self) -> usize {
        self.pages
    }

    fn page_size(&self, _index: usize) -> Result<(f32, f32)> {
        Ok((10.0, 20.0))
    }

    fn render(&self, index: usize, scale: f32) -> Result<RenderedPage> {
        let width = (10.0 * scale).round() as u32;
        let height = (20.0 * scale).round() as u32;
        let pixels = vec![255; (width * height * 4) as usize];
        Ok(RenderedPage::from_rgba(index, width, height, pixels))
    }
}

fn ftl_keys(path: &Path) -> BTreeSet<String> {
    let contents = std::fs::read_to_string(path).expect("read ftl");
    contents
        .lines()
        .filter(|line| !line.starts_with('#') && !line.starts_with(' '))
        .filter_map(|line| line.split_once('=').map(|(key, _)| key.trim().to_string()))
        .filter(|key| !key.is_empty())
        .collect()
}

#[test]
fn translations_define_the_same_keys() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/i18n");
    let english = ftl_keys(&dir.join("en-US.ftl"));
    let french = ftl_keys(&dir.join("fr.ftl"));

    let missing: Vec<_> = english.difference(&french).collect();
    assert!(missing.is_empty(), "missing in fr.ftl: {missing:?}");
    let extra: Vec<_> = french.difference(&english).collect();
    assert!(extra.is_empty(), "missing in en-US.ftl: {extra:?}");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    // The command line wins over the configuration.
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn bookmarks_survive_a_reload_and_clear() {
    let dir = tempdir().expect("temp dir");
    let document = Path::new("/papers/report.pdf");
    let store = BookmarkStore::in_dir(dir.path().to_path_buf(), document);

    let mut list = store.load().expect("empty load");
    assert!(list.is_empty());
    assert!(list.add(3, Some("Results".into())));
    assert!(list.add(1, None));
    store.save(&list).expect("save");

    let reloaded = store.load().expect("reload");
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.contains(3));
    assert!(reloaded.contains(1));

    store.clear_current().expect("clear");
    assert!(store.load().expect("load after clear").is_empty());
}

#[test]
fn page_loader_serves_pages_beyond_the_initial_window() {
    let mut loader = PageLoader::new(FlatSource { pages: 12 }, 2.0).expect("loader");
    assert_eq!(loader.len(), 12);
    assert_eq!(loader.cached_indices(), vec![0, 1, 2, 3, 4]);

    let page = loader.get(9).expect("page 9");
    assert_eq!((page.width, page.height), (20, 40));
    assert!(loader.cached_indices().contains(&9));
    assert!(!loader.cached_indices().contains(&0));
    assert_eq!(loader.cached_indices().len(), loader.capacity());
}

#[test]
fn annotate_and_export_a_page() {
    let dir = tempdir().expect("temp dir");
    let page = FlatSource { pages: 1 }.render(0, 1.0).expect("render");
    let layout = FitLayout::fit(Size::new(10.0, 20.0), Size::new(40.0, 40.0));

    let mut annotator = Annotator::new(layout.offset());
    annotator.select_tool(Tool::Pen);
    let origin = Point::ORIGIN + layout.offset();
    annotator.press(origin + Vector::new(2.0, 2.0));
    annotator.drag(origin + Vector::new(15.0, 30.0));
    annotator.release();
    assert_eq!(annotator.edits().len(), 1);

    let image = annotation::flatten(&page, layout.scale, annotator.edits()).expect("flatten");
    let path = export::validate_file_name("annotated", dir.path()).expect("name");
    export::save_jpeg(&image, &path).expect("save");
    assert!(path.exists());

    // A second save under the same name is refused.
    assert!(export::validate_file_name("annotated", dir.path()).is_err());
}

#[test]
fn capture_default_region_crops_inside_the_page() {
    let page = FlatSource { pages: 1 }.render(0, 3.0).expect("render");
    let view = Size::new(300.0, 300.0);
    let layout = FitLayout::fit(Size::new(page.width as f32, page.height as f32), view);

    let region = CropRegion::new(view, Handedness::Right);
    let image = capture::crop_page(&page, &layout, region.rect())
        .expect("crop")
        .expect("on page");
    assert!(image.width() > 0 && image.width() <= page.width);
    assert!(image.height() > 0 && image.height() <= page.height);
}
