use std::sync::Arc;
use std::time::Duration;

use approx::assert_abs_diff_eq;
use geo_types::point;
use sketchmap::engine::EngineCall;
use sketchmap::{
    BasemapStyle, Container, CreationMode, EngineModule, GeometryKind, HeadlessEngine, MapConfig,
    MapEngine, MapPosition, ReadyState, SceneBootstrapper, SceneError, UiPosition, Visibility,
    Widget, WidgetKind,
};

fn config() -> MapConfig {
    MapConfig::default().with_api_key("test-key")
}

fn bootstrapper(engine: &Arc<HeadlessEngine>, config: MapConfig) -> SceneBootstrapper {
    let engine: Arc<dyn MapEngine> = engine.clone();
    SceneBootstrapper::new(config, engine)
}

fn sketch_calls(engine: &HeadlessEngine) -> usize {
    engine
        .calls()
        .iter()
        .filter(|call| {
            matches!(
                call,
                EngineCall::AddWidget {
                    kind: WidgetKind::Sketch,
                    ..
                }
            )
        })
        .count()
}

#[tokio::test]
async fn mount_creates_scene_and_viewport() {
    let engine = Arc::new(HeadlessEngine::new());
    let map = bootstrapper(&engine, config())
        .mount(Some(Container::new("viewDiv")))
        .await
        .expect("mount succeeds");

    assert_eq!(map.scene().basemap(), BasemapStyle::Topographic);
    assert_eq!(map.scene().basemap().id(), "arcgis/topographic");

    let viewport = map.viewport();
    assert_abs_diff_eq!(viewport.center().longitude, -118.805);
    assert_abs_diff_eq!(viewport.center().latitude, 34.027);
    assert_eq!(viewport.zoom(), 13);
    assert_eq!(viewport.container().id(), "viewDiv");
    assert_eq!(
        viewport.container().style().to_css(),
        "padding: 0; margin: 0; height: 100vh; width: 100%;"
    );

    assert!(engine.calls().contains(&EngineCall::CreateView {
        basemap: BasemapStyle::Topographic,
        center: MapPosition::new(-118.805, 34.027),
        zoom: 13,
    }));
}

#[tokio::test]
async fn overlay_has_exactly_three_graphics_after_mount() {
    let engine = Arc::new(HeadlessEngine::new().with_manual_ready());
    let map = bootstrapper(&engine, config())
        .mount(Some(Container::new("viewDiv")))
        .await
        .expect("mount succeeds");

    let layer = map.scene().overlay().read();
    let kinds: Vec<_> = layer
        .graphics()
        .iter()
        .map(|graphic| graphic.geometry().kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            GeometryKind::Point,
            GeometryKind::Polyline,
            GeometryKind::Polygon
        ]
    );

    let popup = layer
        .popup(map.graphics().polygon)
        .expect("popup renders")
        .expect("polygon has a popup");
    assert_eq!(popup.title, "Graphic");
    assert_eq!(popup.content, "I am a polygon");

    assert!(engine
        .calls()
        .contains(&EngineCall::AddLayer { graphics: 3 }));
}

#[tokio::test]
async fn widgets_are_attached_at_their_anchors() {
    let engine = Arc::new(HeadlessEngine::new().with_manual_ready());
    let map = bootstrapper(&engine, config())
        .mount(Some(Container::new("viewDiv")))
        .await
        .expect("mount succeeds");

    let viewport = map.viewport();
    let top_right = viewport.widgets_at(UiPosition::TopRight);
    assert_eq!(top_right.len(), 1);
    assert!(matches!(top_right[0], Widget::BasemapGallery(_)));

    let bottom_left = viewport.widgets_at(UiPosition::BottomLeft);
    assert!(matches!(
        bottom_left.as_slice(),
        [Widget::ScaleBar(bar)] if bar.unit() == sketchmap::ScaleUnit::Dual
    ));

    let container = viewport.container();
    assert_eq!(container.children().len(), 1);
    assert_eq!(container.children()[0].text, "Toggle Basemap Gallery");
}

#[tokio::test]
async fn toggle_button_flips_gallery() {
    let engine = Arc::new(HeadlessEngine::new());
    let mut map = bootstrapper(&engine, config())
        .mount(Some(Container::new("viewDiv")))
        .await
        .expect("mount succeeds");

    assert_eq!(map.gallery().lock().visibility(), Visibility::Hidden);
    assert_eq!(map.gallery().lock().css_display(), "none");

    assert_eq!(map.toggle_button().click(), Visibility::Visible);
    assert_eq!(map.gallery().lock().css_display(), "block");

    assert_eq!(map.toggle_button().click(), Visibility::Hidden);
    assert_eq!(map.gallery().lock().css_display(), "none");
}

#[tokio::test]
async fn gallery_can_start_visible() {
    let engine = Arc::new(HeadlessEngine::new());
    let config = MapConfig {
        gallery_visible: true,
        ..config()
    };
    let map = bootstrapper(&engine, config)
        .mount(Some(Container::new("viewDiv")))
        .await
        .expect("mount succeeds");

    assert!(map.gallery().lock().is_visible());
}

#[tokio::test]
async fn sketch_is_attached_only_after_ready() {
    let engine = Arc::new(HeadlessEngine::new().with_manual_ready());
    let mut map = bootstrapper(&engine, config())
        .mount(Some(Container::new("viewDiv")))
        .await
        .expect("mount succeeds");

    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
    assert!(map.sketch().is_none());
    assert_eq!(sketch_calls(&engine), 0);
    assert_eq!(map.viewport().ready().state(), ReadyState::Pending);

    assert_eq!(engine.fire_ready(), 1);
    let sketch = map.wait_for_sketch().await.expect("sketch attached");

    assert_eq!(sketch.lock().creation_mode(), CreationMode::Update);
    assert!(Arc::ptr_eq(sketch.lock().layer(), map.scene().overlay()));
    assert_eq!(map.viewport().count_of(WidgetKind::Sketch), 1);
    assert_eq!(sketch_calls(&engine), 1);

    let calls = engine.calls();
    let last = calls.last().expect("calls recorded");
    assert_eq!(
        *last,
        EngineCall::AddWidget {
            kind: WidgetKind::Sketch,
            position: UiPosition::TopRight,
        }
    );

    // Readiness is one-shot: firing again attaches nothing.
    assert_eq!(engine.fire_ready(), 0);
    tokio::task::yield_now().await;
    assert_eq!(sketch_calls(&engine), 1);
    assert!(map.wait_for_sketch().await.is_ok());
}

#[tokio::test]
async fn sketched_graphics_join_the_overlay() {
    let engine = Arc::new(HeadlessEngine::new());
    let mut map = bootstrapper(&engine, config())
        .mount(Some(Container::new("viewDiv")))
        .await
        .expect("mount succeeds");

    let sketch = map.wait_for_sketch().await.expect("sketch attached");
    let id = sketch
        .lock()
        .complete(point!(x: -118.80, y: 34.01).into())
        .expect("point sketch");

    assert_eq!(id.index(), 3);
    assert_eq!(sketch.lock().selected(), Some(id));
    assert_eq!(map.scene().overlay().read().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn sketch_gives_up_after_timeout() {
    let engine = Arc::new(HeadlessEngine::new().with_manual_ready());
    let config = MapConfig {
        ready_timeout_ms: Some(500),
        ..config()
    };
    let mut map = bootstrapper(&engine, config)
        .mount(Some(Container::new("viewDiv")))
        .await
        .expect("mount succeeds");

    let result = map.wait_for_sketch().await;
    assert!(matches!(
        result,
        Err(SceneError::ReadyTimeout(timeout)) if timeout == Duration::from_millis(500)
    ));
    assert!(map.sketch().is_none());

    // The attempt was made once; readiness arriving later changes nothing.
    engine.fire_ready();
    tokio::task::yield_now().await;
    assert_eq!(sketch_calls(&engine), 0);
    assert!(matches!(
        map.wait_for_sketch().await,
        Err(SceneError::ReadyCancelled)
    ));
}

#[tokio::test]
async fn unmount_cancels_pending_sketch() {
    let engine = Arc::new(HeadlessEngine::new().with_manual_ready());
    let map = bootstrapper(&engine, config())
        .mount(Some(Container::new("viewDiv")))
        .await
        .expect("mount succeeds");

    let ready = map.viewport().ready().clone();
    map.unmount();

    assert_eq!(ready.state(), ReadyState::Cancelled);
    assert_eq!(engine.fire_ready(), 0);
    tokio::task::yield_now().await;
    assert_eq!(sketch_calls(&engine), 0);
}

#[tokio::test]
async fn module_failure_aborts_mount() {
    let engine = Arc::new(HeadlessEngine::new().with_failing_module(EngineModule::Sketch));
    let result = bootstrapper(&engine, config())
        .mount(Some(Container::new("viewDiv")))
        .await;

    assert!(matches!(
        result,
        Err(SceneError::ModuleLoad {
            module: EngineModule::Sketch,
            ..
        })
    ));

    let calls = engine.calls();
    assert!(calls
        .iter()
        .all(|call| matches!(call, EngineCall::LoadModule { .. })));
}

#[tokio::test(start_paused = true)]
async fn modules_load_concurrently() {
    let engine = Arc::new(HeadlessEngine::new().with_load_delay(Duration::from_secs(1)));
    let started = tokio::time::Instant::now();

    bootstrapper(&engine, config())
        .mount(Some(Container::new("viewDiv")))
        .await
        .expect("mount succeeds");

    assert!(started.elapsed() < Duration::from_secs(2));
    let loads = engine
        .calls()
        .iter()
        .filter(|call| matches!(call, EngineCall::LoadModule { .. }))
        .count();
    assert_eq!(loads, EngineModule::ALL.len());
}

#[tokio::test]
async fn credential_is_set_before_anything_is_constructed() {
    let engine = Arc::new(HeadlessEngine::new());
    bootstrapper(&engine, config())
        .mount(Some(Container::new("viewDiv")))
        .await
        .expect("mount succeeds");

    let calls = engine.calls();
    let position = calls
        .iter()
        .position(|call| matches!(call, EngineCall::SetCredentials { has_key: true }))
        .expect("credential set");
    assert!(calls[..position]
        .iter()
        .all(|call| matches!(call, EngineCall::LoadModule { .. })));
    assert!(matches!(
        calls[position + 1],
        EngineCall::CreateView { .. }
    ));
}

#[tokio::test]
async fn missing_container_is_fatal() {
    let engine = Arc::new(HeadlessEngine::new());
    let result = bootstrapper(&engine, config()).mount(None).await;

    assert!(matches!(result, Err(SceneError::MissingContainer)));
    assert!(engine.calls().is_empty());
}

#[tokio::test]
async fn invalid_config_is_rejected_before_engine_calls() {
    let engine = Arc::new(HeadlessEngine::new());
    let config = MapConfig {
        zoom: 99,
        center: MapPosition::new(500.0, -300.0),
        ..config()
    };
    let result = bootstrapper(&engine, config)
        .mount(Some(Container::new("viewDiv")))
        .await;

    assert!(matches!(result, Err(SceneError::Config(_))));
    assert!(engine.calls().is_empty());
}

#[tokio::test]
async fn missing_credential_is_reported() {
    let engine = Arc::new(HeadlessEngine::new());
    let result = bootstrapper(&engine, MapConfig::default())
        .mount(Some(Container::new("viewDiv")))
        .await;

    assert!(matches!(
        result,
        Err(SceneError::MissingCredential {
            basemap: "arcgis/topographic"
        })
    ));
    assert!(!engine
        .calls()
        .iter()
        .any(|call| matches!(call, EngineCall::CreateView { .. })));
}

#[tokio::test]
async fn open_basemap_needs_no_credential() {
    let engine = Arc::new(HeadlessEngine::new());
    let config = MapConfig {
        basemap: BasemapStyle::OpenStreetMap,
        ..MapConfig::default()
    };
    let map = bootstrapper(&engine, config)
        .mount(Some(Container::new("viewDiv")))
        .await
        .expect("mount succeeds");

    assert_eq!(map.scene().basemap(), BasemapStyle::OpenStreetMap);
    assert!(engine
        .calls()
        .contains(&EngineCall::SetCredentials { has_key: false }));
}
