//! The built-in key catalog.
//!
//! Authored once at configuration-initialization time; a project maintainer
//! can add, edit, or remove entries afterwards through the config layer.
//! Keys that apply across numeric widths are declared once with every width
//! in their pattern set.

use metakey_foundation::{ClassId, Interner, KeyType, PropertyCategory, PropertyTypePattern};

use crate::class::ClassGraph;
use crate::key::MetaDataKey;
use crate::registry::KeyRegistry;

/// Builds the default registry, interning the well-known subtype and class
/// names it references.
///
/// Registers `WidgetBlueprint` as a subclass of the base blueprint class.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn default_registry(interner: &mut Interner, classes: &mut ClassGraph) -> KeyRegistry {
    use PropertyCategory::{
        Bool, Byte, Class, Double, Enum, Float, Int, Int64, Name, Object, SoftClass, SoftObject,
        String as StringCat, Struct,
    };

    let widget_blueprint = interner.intern_class("WidgetBlueprint");
    classes.register(widget_blueprint, ClassId::BLUEPRINT);

    let widget = interner.intern_subtype("Widget");
    let widget_animation = interner.intern_subtype("WidgetAnimation");
    let gameplay_tag = interner.intern_subtype("GameplayTag");
    let gameplay_tag_container = interner.intern_subtype("GameplayTagContainer");
    let primary_asset_id = interner.intern_subtype("PrimaryAssetId");
    let data_table = interner.intern_subtype("DataTable");
    let data_table_row_handle = interner.intern_subtype("DataTableRowHandle");
    let linear_color = interner.intern_subtype("LinearColor");
    let color = interner.intern_subtype("Color");
    let object = interner.intern_subtype("Object");
    let soft_object_path = interner.intern_subtype("SoftObjectPath");
    let soft_class_path = interner.intern_subtype("SoftClassPath");

    let numeric = || {
        [Int, Int64, Float, Double]
            .into_iter()
            .map(PropertyTypePattern::of)
    };
    let integers = || [Int, Int64].into_iter().map(PropertyTypePattern::of);
    let enums = || [Enum, Byte].into_iter().map(PropertyTypePattern::of);
    let tag_structs = || {
        [gameplay_tag, gameplay_tag_container]
            .into_iter()
            .map(|s| PropertyTypePattern::of(Struct).with_subtype(s))
    };
    let data_tables = || {
        [
            PropertyTypePattern::of(Struct).with_subtype(data_table_row_handle),
            PropertyTypePattern::of(Object).with_subtype(data_table),
            PropertyTypePattern::of(SoftObject).with_subtype(data_table),
        ]
        .into_iter()
    };
    let colors = || {
        [linear_color, color]
            .into_iter()
            .map(|s| PropertyTypePattern::of(Struct).with_subtype(s))
    };
    let object_like = || {
        [
            PropertyTypePattern::of(Object).with_subtype(object),
            PropertyTypePattern::of(SoftObject).with_subtype(object),
            PropertyTypePattern::of(Class).with_subtype(object),
            PropertyTypePattern::of(SoftClass).with_subtype(object),
            PropertyTypePattern::of(Struct).with_subtype(soft_object_path),
            PropertyTypePattern::of(Struct).with_subtype(soft_class_path),
        ]
        .into_iter()
    };
    let soft_refs = || {
        [
            PropertyTypePattern::of(SoftObject).with_subtype(object),
            PropertyTypePattern::of(SoftClass).with_subtype(object),
            PropertyTypePattern::of(Struct).with_subtype(soft_object_path),
            PropertyTypePattern::of(Struct).with_subtype(soft_class_path),
        ]
        .into_iter()
    };
    let class_like = || {
        [
            PropertyTypePattern::of(Class).with_subtype(object),
            PropertyTypePattern::of(SoftClass).with_subtype(object),
            PropertyTypePattern::of(Struct).with_subtype(soft_class_path),
        ]
        .into_iter()
    };

    KeyRegistry::from_keys([
        // Any property
        MetaDataKey::new(
            "EditCondition",
            KeyType::String,
            "Enter a condition to determine whether or not this property can be edited. Supports bools and enums.",
        ),
        MetaDataKey::new(
            "EditConditionHides",
            KeyType::Flag,
            "If this property's EditCondition is false, it will be hidden.",
        )
        .requires("EditCondition"),
        MetaDataKey::new(
            "DisplayAfter",
            KeyType::String,
            "In the details panel, this property will be displayed after the property specified here.",
        ),
        MetaDataKey::new(
            "DisplayPriority",
            KeyType::Integer,
            "The priority to display this property in the details panel, lower values are first.",
        ),
        MetaDataKey::new(
            "NoResetToDefault",
            KeyType::Flag,
            "If set, this property will never show the 'Reset to Default' arrow button.",
        ),
        // Bool properties
        MetaDataKey::new(
            "InlineEditConditionToggle",
            KeyType::Flag,
            "If this bool is an EditCondition for another property, it will be displayed inline.",
        )
        .only_pattern(PropertyTypePattern::of(Bool)),
        // Any numeric property
        MetaDataKey::new(
            "NoSpinbox",
            KeyType::Bool,
            "Disables the click and drag functionality for setting the value of this property.",
        )
        .with_patterns(numeric()),
        MetaDataKey::new(
            "SliderExponent",
            KeyType::Float,
            "How fast the value should change while dragging to set the value.",
        )
        .with_patterns(numeric())
        .with_min_float(1.0),
        MetaDataKey::new(
            "Delta",
            KeyType::Float,
            "How much to change the value by when dragging.",
        )
        .with_patterns(numeric()),
        MetaDataKey::new(
            "Multiple",
            KeyType::Float,
            "Forces the property value to be a multiple of this value.",
        )
        .with_patterns(numeric()),
        // Integers
        MetaDataKey::new(
            "ArrayClamp",
            KeyType::String,
            "Clamps the valid values that can be entered in the UI to be between 0 and the length of the array specified.",
        )
        .with_patterns(integers()),
        // Non-localized strings
        MetaDataKey::new(
            "GetOptions",
            KeyType::String,
            "Specify a function that returns a list of strings or names that are valid values for this property.",
        )
        .with_patterns([
            PropertyTypePattern::of(StringCat),
            PropertyTypePattern::of(Name),
        ]),
        // Any array
        MetaDataKey::new(
            "NoElementDuplicate",
            KeyType::Flag,
            "Indicates that the duplicate icon should not be shown for entries of this array in the property panel.",
        )
        .only_pattern(PropertyTypePattern::wildcard().in_array()),
        // Any map
        MetaDataKey::new(
            "ForceInlineRow",
            KeyType::Flag,
            "Force the key and value of a map to display in the same row.",
        )
        .only_pattern(
            PropertyTypePattern::wildcard()
                .with_value_pattern(PropertyTypePattern::wildcard())
                .in_map(),
        ),
        // Array of any struct
        MetaDataKey::new(
            "TitleProperty",
            KeyType::String,
            "Specify a child property or text-style format of child properties to use as the summary.",
        )
        .only_pattern(PropertyTypePattern::of(Struct).in_array()),
        // Any struct
        MetaDataKey::new(
            "ShowOnlyInnerProperties",
            KeyType::Flag,
            "Removes the struct layer in the details panel, directly displaying the child properties of the struct.",
        )
        .only_pattern(PropertyTypePattern::of(Struct)),
        // Any enum
        MetaDataKey::new(
            "ValidEnumValues",
            KeyType::String,
            "Restricts selection to a subset of the enum's values.",
        )
        .with_patterns(enums()),
        MetaDataKey::new(
            "InvalidEnumValues",
            KeyType::String,
            "Prevents selecting a subset of the enum's values.",
        )
        .with_patterns(enums()),
        // Gameplay tags and containers
        MetaDataKey::new(
            "Categories",
            KeyType::GameplayTagContainer,
            "Limit which gameplay tags may be selected to one or more specific root tags.",
        )
        .with_patterns(tag_structs()),
        // Primary asset ids
        MetaDataKey::new(
            "AllowedTypes",
            KeyType::String,
            "Limit which primary data assets may be selected to one or more specific primary asset types.",
        )
        .only_pattern(PropertyTypePattern::of(Struct).with_subtype(primary_asset_id)),
        // Data tables
        MetaDataKey::new(
            "RowType",
            KeyType::String,
            "Limit the selection to a specific data table row struct type.",
        )
        .with_patterns(data_tables()),
        MetaDataKey::new(
            "RequiredAssetDataTags",
            KeyType::String,
            "Limit the selection to data tables with matching asset data tags.",
        )
        .with_patterns(data_tables()),
        // Colors
        MetaDataKey::new(
            "HideAlphaChannel",
            KeyType::Flag,
            "Hide the alpha channel from the color picker.",
        )
        .with_patterns(colors()),
        // Any object type
        MetaDataKey::new(
            "DisplayThumbnail",
            KeyType::Bool,
            "Whether or not to display the asset thumbnail.",
        )
        .with_patterns(object_like()),
        MetaDataKey::new(
            "NoClear",
            KeyType::Flag,
            "Prevent this property from being cleared/set to none.",
        )
        .with_patterns(object_like()),
        // Soft references
        MetaDataKey::new(
            "AssetBundles",
            KeyType::String,
            "The name of the bundle to store the secondary asset in.",
        )
        .with_patterns(soft_refs()),
        MetaDataKey::new(
            "Untracked",
            KeyType::Flag,
            "Specify that the soft reference should not be tracked and therefore not automatically cooked or checked during delete or redirector fixup.",
        )
        .with_patterns(soft_refs()),
        // Class references
        MetaDataKey::new(
            "AllowAbstract",
            KeyType::Flag,
            "Include abstract classes in the class picker for this property.",
        )
        .with_patterns(class_like()),
        MetaDataKey::new(
            "ShowTreeView",
            KeyType::Flag,
            "Show a tree of class inheritance instead of a list view for the class picker.",
        )
        .with_patterns(class_like()),
        MetaDataKey::new(
            "BlueprintBaseOnly",
            KeyType::Flag,
            "Only allow selecting blueprint classes.",
        )
        .with_patterns(class_like()),
        MetaDataKey::new(
            "ExactClass",
            KeyType::Flag,
            "Only allow selecting specifically from the list of allowed classes, no subclasses.",
        )
        .with_patterns(class_like())
        .requires("AllowedClasses"),
        MetaDataKey::new(
            "MustImplement",
            KeyType::String,
            "Only allow classes that inherit the specified interface.",
        )
        .with_patterns(class_like()),
        MetaDataKey::new(
            "AllowedClasses",
            KeyType::String,
            "Only allow selecting specific classes/interfaces or subclasses of them.",
        )
        .with_patterns(class_like()),
        // Widget blueprints only
        MetaDataKey::new(
            "DesignerRebuild",
            KeyType::Flag,
            "When this property changes, the widget preview will be rebuilt.",
        )
        .with_category("UMG")
        .only_blueprint(widget_blueprint),
        MetaDataKey::new(
            "BindWidget",
            KeyType::Flag,
            "This property requires a widget be bound to it in any child widget blueprints.",
        )
        .with_category("UMG|Bind Widget")
        .only_blueprint(widget_blueprint)
        .only_pattern(PropertyTypePattern::of(Object).with_subtype(widget))
        .incompatible_with("BindWidgetOptional"),
        MetaDataKey::new(
            "BindWidgetOptional",
            KeyType::Flag,
            "This property allows a widget be bound to it in any child widget blueprints.",
        )
        .with_category("UMG|Bind Widget")
        .only_blueprint(widget_blueprint)
        .only_pattern(PropertyTypePattern::of(Object).with_subtype(widget))
        .incompatible_with("BindWidget"),
        MetaDataKey::new(
            "BindWidgetAnim",
            KeyType::Flag,
            "This property requires a widget animation be bound to it in any child widget blueprints.",
        )
        .with_category("UMG|Bind Widget Anim")
        .only_blueprint(widget_blueprint)
        .only_pattern(PropertyTypePattern::of(Object).with_subtype(widget_animation))
        .incompatible_with("BindWidgetAnimOptional"),
        MetaDataKey::new(
            "BindWidgetAnimOptional",
            KeyType::Flag,
            "This property allows a widget animation be bound to it in any child widget blueprints.",
        )
        .with_category("UMG|Bind Widget Anim")
        .only_blueprint(widget_blueprint)
        .only_pattern(PropertyTypePattern::of(Object).with_subtype(widget_animation))
        .incompatible_with("BindWidgetAnim"),
        // Functions only
        MetaDataKey::new(
            "DefaultToSelf",
            KeyType::String,
            "Specify which function parameter should default to \"self\".",
        )
        .functions_only(),
    ])
}
