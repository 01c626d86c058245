//! Page-ready fan-out
//!
//! Mounts every widget onto a [`Page`]. Each initializer is independent: a
//! page without a hero still gets its nav toggle.

use vitrine::{Dom, Page, Scheduler};

use crate::choose::ChooseCarousel;
use crate::exhibition::ExhibitionSlider;
use crate::hero::HeroSlider;
use crate::marquee::MarqueePause;
use crate::nav::MobileNav;

/// Mount hero, marquee, choose, exhibition and nav, in that order
///
/// # Returns
/// Number of widgets that found their markup
pub fn mount_all<D, S>(page: &mut Page<D, S>) -> usize
where
    D: Dom + 'static,
    D::Element: 'static,
    S: Scheduler,
{
    let mounted = [
        page.mount(|cx, prefs, config| HeroSlider::mount(cx, prefs, config)),
        page.mount(|cx, _, _| MarqueePause::mount(cx)),
        page.mount(|cx, _, config| ChooseCarousel::mount(cx, config)),
        page.mount(|cx, prefs, config| ExhibitionSlider::mount(cx, prefs, config)),
        page.mount(|cx, _, _| MobileNav::mount(cx)),
    ]
    .into_iter()
    .flatten()
    .count();
    log::debug!("page ready: {mounted} widgets mounted");
    mounted
}
