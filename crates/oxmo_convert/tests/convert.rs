//! Conversion of complete documents
use insta::assert_snapshot;
use oxmo_annotation::Indent;
use oxmo_convert::{convert, Error, Options};
use pretty_assertions::assert_eq;

#[test]
fn rectangle() -> anyhow::Result<()> {
    assert_snapshot!(convert(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="5">
            <rect x="0" y="0" width="10" height="5"/>
        </svg>"#,
        &Options::default(),
    )?, @r"
    model DummyModel
      annotation(
        Icon(
          coordinateSystem(
            preserveAspectRatio= false,
            extent= {{0,-5},{10,0}}
          ),
          graphics= {
            Rectangle(
              origin= {0, 0},
              lineColor= {0,0,0},
              pattern= LinePattern.Solid,
              fillPattern= FillPattern.Solid,
              extent= {{0,-5},{10,0}}
            )
          }
        )
      );
    end DummyModel;
    ");
    Ok(())
}

#[test]
fn normalized_extent() -> anyhow::Result<()> {
    let options = Options {
        model_name: String::from("Scaled"),
        normalize_extent: true,
        ..Options::default()
    };
    assert_snapshot!(convert(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 50">
            <rect x="10" y="10" width="20" height="10" style="fill:none;stroke:#000;stroke-width:1.5"/>
        </svg>"##,
        &options,
    )?, @r"
    model Scaled
      annotation(
        Icon(
          coordinateSystem(
            preserveAspectRatio= false,
            extent= {{-100,-50},{100,50}}
          ),
          graphics= {
            Rectangle(
              origin= {-100, 50},
              lineColor= {0,0,0},
              pattern= LinePattern.Solid,
              fillPattern= FillPattern.None,
              lineThickness= 3,
              extent= {{20,-40},{60,-20}}
            )
          }
        )
      );
    end Scaled;
    ");
    Ok(())
}

#[test]
fn inkscape_document() -> anyhow::Result<()> {
    let source = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg
   xmlns="http://www.w3.org/2000/svg"
   xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd"
   xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
   width="200"
   height="200"
   viewBox="0 0 200 200">
  <sodipodi:namedview id="base" pagecolor="#ffffff"/>
  <metadata id="metadata5"/>
  <g inkscape:label="Layer 1" inkscape:groupmode="layer" id="layer1" transform="translate(0,-100)">
    <path
       sodipodi:type="arc"
       id="half"
       sodipodi:cx="100"
       sodipodi:cy="200"
       sodipodi:rx="50"
       sodipodi:ry="50"
       sodipodi:start="0"
       sodipodi:end="3.1415926535897931"
       d="M 150,200 A 50,50 0 0 1 100,250 50,50 0 0 1 50,200"
       style="fill:#ffcc00;stroke:#000000;stroke-width:2"/>
    <text x="100" y="150" id="label" style="font-size:20px;fill:#000000"><tspan x="100" y="150" style="text-anchor:middle">R</tspan></text>
  </g>
</svg>"##;
    assert_snapshot!(convert(source, &Options::default())?, @r#"
    model DummyModel
      annotation(
        Icon(
          coordinateSystem(
            preserveAspectRatio= false,
            extent= {{0,-200},{200,0}}
          ),
          graphics= {
            Ellipse(
              origin= {0, 100},
              lineColor= {0,0,0},
              fillColor= {255,204,0},
              pattern= LinePattern.Solid,
              fillPattern= FillPattern.Solid,
              lineThickness= 2,
              extent= {{50,-250},{150,-150}},
              startAngle= 180,
              endAngle= 360
            ),
            Text(
              origin= {0, 100},
              lineColor= {0,0,0},
              pattern= LinePattern.Solid,
              extent= {{93.82,-156.20},{106.18,-130.20}},
              textString= "R",
              fontSize= 56.69,
              horizontalAlignment= TextAlignment.Center
            )
          }
        )
      );
    end DummyModel;
    "#);
    Ok(())
}

#[test]
fn tabs() -> anyhow::Result<()> {
    let options = Options {
        indent: Indent::Tabs,
        ..Options::default()
    };
    let output = convert(r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#, &options)?;
    assert_eq!(
        output.lines().take(4).collect::<Vec<_>>(),
        vec![
            "model DummyModel",
            "\tannotation(",
            "\t\tIcon(",
            "\t\t\tcoordinateSystem(",
        ]
    );
    Ok(())
}

#[test]
fn strict_mode() {
    let strict = Options {
        strict: true,
        ..Options::default()
    };
    let source = r#"<svg xmlns="http://www.w3.org/2000/svg">
        <rect width="1" height="1" style="stroke:blue"/>
    </svg>"#;
    assert!(convert(source, &Options::default()).is_ok());
    let error = convert(source, &strict).unwrap_err();
    assert!(matches!(error, Error::Value { .. }));
    assert_eq!(error.to_string(), "<rect>: `stroke: blue` is not supported");
}

#[test]
fn malformed_path() {
    let error = convert(
        r#"<svg xmlns="http://www.w3.org/2000/svg"><path id="p" d="M0,0 L1"/></svg>"#,
        &Options::default(),
    )
    .unwrap_err();
    assert!(matches!(error, Error::Path { .. }));
    assert!(error.to_string().starts_with(r#"<path id="p">: "#));
}
