use pc3d_core::{
    categories, map_to_render_params, options_for, Category, ConfigError, ConfigState, Event,
    Outcome, Rgb, SelectionController, Session, TabNavigation,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn default_state_renders_plain_white_plastic() {
    let params = map_to_render_params(&ConfigState::default());
    assert!(approx(params.scale, 1.0));
    assert!(approx(params.metalness, 0.0));
    assert!(approx(params.roughness, 0.5));
    assert_eq!(params.base_color.to_string(), "#ffffff");
}

#[test]
fn large_glossy_metal() {
    let mut controller = SelectionController::new();
    controller.select(Category::Material, "metal").unwrap();
    controller.select(Category::Size, "large").unwrap();
    controller.select(Category::Texture, "glossy").unwrap();

    let params = map_to_render_params(controller.state());
    assert!(approx(params.scale, 1.2));
    assert!(approx(params.metalness, 0.8));
    assert!(approx(params.roughness, 0.1));
    assert_eq!(params.base_color, Rgb::WHITE);
}

#[test]
fn bogus_size_keeps_previous_scale() {
    let mut controller = SelectionController::new();
    controller.select(Category::Size, "small").unwrap();
    assert!(approx(map_to_render_params(controller.state()).scale, 0.8));

    let err = controller.select(Category::Size, "bogus").unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidOption {
            category: Category::Size,
            value: "bogus".into()
        }
    );
    assert!(approx(map_to_render_params(controller.state()).scale, 0.8));
}

#[test]
fn activating_color_twice_leaves_configuration_alone() {
    let mut session = Session::new();
    let state = *session.state();

    for _ in 0..2 {
        session.dispatch(Event::ActivateTab(Category::Color)).unwrap();
        assert_eq!(session.tabs().active(), Category::Color);
        assert_eq!(*session.state(), state);
    }
}

#[test]
fn every_catalog_option_is_selectable() {
    for &category in categories() {
        for option in options_for(category) {
            let mut session = Session::new();
            let before = *session.state();
            session
                .dispatch(Event::select(category, option.id))
                .unwrap_or_else(|e| panic!("{category}/{}: {e}", option.id));

            let after = session.state();
            assert!(after.is_selected(category, option));
            for &other in categories() {
                if other != category {
                    assert_eq!(after.value_of(other), before.value_of(other));
                }
            }
        }
    }
}

#[test]
fn tab_switching_never_changes_render_params() {
    let mut session = Session::new();
    session.dispatch(Event::select(Category::Texture, "matte")).unwrap();
    let params = session.render_params();

    let sequence = [
        Category::Size,
        Category::Size,
        Category::Material,
        Category::Texture,
        Category::Color,
    ];
    for category in sequence {
        session.dispatch(Event::ActivateTab(category)).unwrap();
        assert_eq!(session.render_params(), params);
    }
}

#[test]
fn structurally_equal_states_map_to_equal_params() {
    let a = ConfigState::default()
        .with_selection(Category::Color, "#0000ff")
        .unwrap();
    let b = ConfigState::default()
        .with_selection(Category::Color, "blue")
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(map_to_render_params(&a), map_to_render_params(&b));
}

#[test]
fn selecting_never_moves_the_tab() {
    let mut session = Session::new();
    let tabs = *session.tabs();
    assert_eq!(
        session.dispatch(Event::select(Category::Texture, "glossy")).unwrap(),
        Outcome::SelectionChanged
    );
    assert_eq!(*session.tabs(), tabs);
    assert_eq!(tabs, TabNavigation::new());
}
