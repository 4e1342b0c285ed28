// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::document::{PageLoader, PageSource, RenderedPage};
use iced_folio::error::Result;
use std::hint::black_box;

/// In-memory source producing A4-sized blank pages.
struct BlankSource {
    pages: usize,
}

impl PageSource for BlankSource {
    fn page_count(&self) -> usize {
        self.pages
    }

    fn page_size(&self, _index: usize) -> Result<(f32, f32)> {
        Ok((595.0, 842.0))
    }

    fn render(&self, index: usize, scale: f32) -> Result<RenderedPage> {
        let width = (595.0 * scale) as u32;
        let height = (842.0 * scale) as u32;
        Ok(RenderedPage::from_rgba(
            index,
            width,
            height,
            vec![255; (width * height * 4) as usize],
        ))
    }
}

fn bench_page_loader(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_loader");

    group.bench_function("cache_hit", |b| {
        let mut loader = PageLoader::new(BlankSource { pages: 50 }, 1.0).expect("loader");
        b.iter(|| black_box(loader.get(black_box(2)).expect("page")));
    });

    group.bench_function("sequential_scroll", |b| {
        let mut loader = PageLoader::new(BlankSource { pages: 50 }, 1.0).expect("loader");
        let mut index = 0;
        b.iter(|| {
            index = (index + 1) % 50;
            black_box(loader.get(index).expect("page"))
        });
    });

    group.bench_function("jump_to_page", |b| {
        let mut loader = PageLoader::new(BlankSource { pages: 50 }, 1.0).expect("loader");
        let mut pos = 0;
        b.iter(|| {
            pos = (pos + 17) % 50;
            loader.load_pos(black_box(pos)).expect("load");
        });
    });

    group.finish();
}

criterion_group!(benches, bench_page_loader);
criterion_main!(benches);
