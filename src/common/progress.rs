//! 進捗表示

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use image::Rgb;

use super::constants::PROGRESS_BAR_WIDTH;
use super::error::Result;
use super::pixel::ColorProvider;

/// 総数が分かっている処理の進捗カウンタ
///
/// 複数スレッドから `tick` してよい。表示は全体の 1% ごとに間引く。
#[derive(Debug)]
pub struct Progress {
    total: u64,
    done: AtomicU64,
    update_interval: u64,
    visible: bool,
}

impl Progress {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            done: AtomicU64::new(0),
            update_interval: std::cmp::max(1, total / 100),
            visible: true,
        }
    }

    /// 表示しない（カウントのみ）
    pub fn hidden(total: u64) -> Self {
        Self {
            visible: false,
            ..Self::new(total)
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn done(&self) -> u64 {
        self.done.load(Ordering::Relaxed)
    }

    pub fn tick(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if self.visible && (done % self.update_interval == 0 || done == self.total) {
            self.draw(done);
        }
    }

    /// 最終状態を描き直してから改行する
    pub fn finish(&self) {
        if self.visible {
            self.draw(self.done());
            eprintln!(" done");
        }
    }

    fn ratio(&self, done: u64) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            (done.min(self.total)) as f64 / self.total as f64
        }
    }

    fn draw(&self, done: u64) {
        let ratio = self.ratio(done);
        let filled = (ratio * PROGRESS_BAR_WIDTH as f64) as usize;
        let empty = PROGRESS_BAR_WIDTH - filled;

        let mut err = std::io::stderr();
        write!(
            err,
            "\rrendering: [{}{}] {:>3}%",
            "█".repeat(filled),
            "░".repeat(empty),
            (ratio * 100.0) as u32
        )
        .ok();
        err.flush().ok();
    }
}

/// `color_at` の呼び出し毎に進捗を進めるラッパー
pub struct WithProgress<'a, P> {
    inner: P,
    progress: &'a Progress,
}

impl<'a, P: ColorProvider> WithProgress<'a, P> {
    pub fn new(inner: P, progress: &'a Progress) -> Self {
        Self { inner, progress }
    }
}

impl<P: ColorProvider> ColorProvider for WithProgress<'_, P> {
    fn color_at(&self, x: u32, y: u32) -> Result<Rgb<u8>> {
        let rgb = self.inner.color_at(x, y)?;
        self.progress.tick();
        Ok(rgb)
    }

    fn dimensions(&self) -> (u32, u32) {
        self.inner.dimensions()
    }
}
